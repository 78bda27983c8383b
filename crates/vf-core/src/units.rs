// vf-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, ThermodynamicTemperature as UomThermodynamicTemperature,
    Velocity as UomVelocity, Volume as UomVolume,
};

// Public canonical unit types (f64). The calculation methodology is written
// in Imperial units, so constructors and getters are Imperial-facing.
pub type Area = UomArea;
pub type Length = UomLength;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;
pub type Volume = UomVolume;

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn sqft(v: f64) -> Area {
    use uom::si::area::square_foot;
    Area::new::<square_foot>(v)
}

#[inline]
pub fn degf(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    Temperature::new::<degree_fahrenheit>(v)
}

#[inline]
pub fn mph(v: f64) -> Velocity {
    use uom::si::velocity::mile_per_hour;
    Velocity::new::<mile_per_hour>(v)
}

#[inline]
pub fn to_ft(v: Length) -> f64 {
    use uom::si::length::foot;
    v.get::<foot>()
}

#[inline]
pub fn to_sqft(v: Area) -> f64 {
    use uom::si::area::square_foot;
    v.get::<square_foot>()
}

#[inline]
pub fn to_cuft(v: Volume) -> f64 {
    use uom::si::volume::cubic_foot;
    v.get::<cubic_foot>()
}

#[inline]
pub fn to_degf(v: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    v.get::<degree_fahrenheit>()
}

#[inline]
pub fn to_rankine(v: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_rankine;
    v.get::<degree_rankine>()
}

#[inline]
pub fn to_mph(v: Velocity) -> f64 {
    use uom::si::velocity::mile_per_hour;
    v.get::<mile_per_hour>()
}

pub mod constants {
    /// Gas constant for air [ft·lbf/(lb·°R)].
    pub const R_AIR_FT_LBF_PER_LB_R: f64 = 53.353;

    /// Standard atmospheric pressure [lbf/ft²].
    pub const P_ATM_PSF: f64 = 2116.22;

    /// Gravitational acceleration [ft/s²].
    pub const G_FT_PER_S2: f64 = 32.2;

    /// Wind unit conversion: mph at the vent face into ft/min of flow
    /// per unit free area.
    pub const C4_WIND_UNITS: f64 = 88.0;
}
