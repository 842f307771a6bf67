pub mod parking_lot_repo;
pub mod parking_ticket_repo;

pub use parking_lot_repo::ParkingLotRepo;
pub use parking_ticket_repo::ParkingTicketRepo;
