pub mod booth_divider;
pub mod booth_locations;
pub mod direct_ship;
pub mod reservations;
