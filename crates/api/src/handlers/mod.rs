pub mod parking_lot;
pub mod ticket;
