pub mod parking_lot;
pub mod parking_ticket;
