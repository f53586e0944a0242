pub mod chart;
pub mod crew;
pub mod evidence;
pub mod files;
pub mod mission;
pub mod passport;
pub mod summary;
pub mod validate;
