//! Physical constants in SI units.

/// Mean radius of the Earth, in metres.
pub const MEAN_EARTH_RADIUS: f64 = 6_378_137.0;

/// Newtonian gravitational constant, in m^3 kg^-1 s^-2.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.673e-11;

/// SI (m s^-2) to mGal conversion factor.
pub const SI_TO_MGAL: f64 = 1.0e5;

/// SI (s^-2) to Eotvos conversion factor.
pub const SI_TO_EOTVOS: f64 = 1.0e9;

/// Default stack capacity for the adaptive subdivision driver.
pub const DEFAULT_STACK_SIZE: usize = 500;
