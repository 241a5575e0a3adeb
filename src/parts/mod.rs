//! The nine worksheet parts
//!
//! Each part is an independent function of fixed inputs that returns a
//! [`Section`] of labeled results. [`run_all`] evaluates them in order.

use std::f64::consts::PI;

use crate::constants::{CM, EARTH_DISTANCE, MARS_DISTANCE, MINUTE_S, MM, NM, SUN_AREA, SUN_FLUX};
use crate::geometry::{projected_cone, Angle, SolidAngle};
use crate::radiometry::{
    disc_area, electrical_power, energy, illuminance, inverse_square, irradiance_from_intensity,
    photon_energy, photon_rate, radiant_power, sky_irradiance, sphere_area, IsotropicPointSource,
    LambertianEmitter, SphericalEmitter,
};
use crate::report::{Notation, Report, Section};
use crate::{RadiometryError, Result};

/// Signature shared by every part
pub type PartFn = fn() -> Result<Section>;

/// All parts in print order; `PARTS[n - 1]` computes part `n`
pub const PARTS: [PartFn; 9] = [
    part1, part2, part3, part4, part5, part6, part7, part8, part9,
];

/// Evaluate every part in order
pub fn run_all() -> Result<Report> {
    let sections: Result<Vec<_>> = PARTS.iter().map(|part| part()).collect();
    Ok(Report::new(sections?))
}

/// Evaluate a single part, numbered from 1
pub fn run_part(number: u8) -> Result<Section> {
    let index = usize::from(number)
        .checked_sub(1)
        .filter(|i| *i < PARTS.len())
        .ok_or(RadiometryError::UnknownPart(number))?;
    PARTS[index]()
}

/// Bulb from parts 2 and 3: 2.4 V at 0.7 A
fn flashlight_bulb() -> IsotropicPointSource {
    IsotropicPointSource::new(electrical_power(2.4, 0.7))
}

/// Photon output of a 25 W, 20% efficient green source
pub fn part1() -> Result<Section> {
    const WAVELENGTH_NM: f64 = 500.0;
    let wavelength = WAVELENGTH_NM * NM;
    let power = radiant_power(25.0, 0.2);

    let energy = photon_energy(wavelength)?;
    let rate = photon_rate(power, wavelength)?;
    log::debug!("part 1: E = {energy} J, rate = {rate} photons/s");

    let photon = format!("a photon with a wavelength of {WAVELENGTH_NM} nm");
    let energy_label = format!("The energy of {photon}");
    let mut section = Section::new(1);
    section
        .sentence(energy_label, energy, "J", Notation::Shortest)
        .sentence(
            "The number of photons per second",
            rate,
            "",
            Notation::Shortest,
        );
    Ok(section)
}

/// Small bulb treated as an isotropic point source
pub fn part2() -> Result<Section> {
    let bulb = flashlight_bulb();
    let diameter = 1.0 * CM;
    let duration = 5.0 * MINUTE_S;

    let area = sphere_area(diameter)?;
    let exitance = bulb.exitance_over_sphere(diameter)?;
    log::debug!("part 2: P = {} W, A = {area} m²", bulb.flux);

    let mut section = Section::new(2);
    section
        .quantity("Radiant flux (Φ)", bulb.flux, "W", Notation::Fixed(4))
        .quantity(
            "Radiant intensity (I)",
            bulb.intensity(),
            "W/sr",
            Notation::Fixed(6),
        )
        .quantity("Radiant exitance (M)", exitance, "W/m²", Notation::Fixed(2))
        .quantity(
            "Emitted energy in 5 minutes (E)",
            bulb.energy(duration),
            "J",
            Notation::Fixed(2),
        )
        .quantity("Surface area (A)", area, "m²", Notation::Fixed(8));
    Ok(section)
}

/// The same bulb seen through a 6 mm opening 1 m away
pub fn part3() -> Result<Section> {
    let bulb = flashlight_bulb();
    let distance = 1.0;
    let opening = disc_area(6.0 * MM)?;

    let irradiance = bulb.irradiance_at(distance)?;
    let through_opening = bulb.power_through_aperture(distance, opening)?;
    log::debug!("part 3: E = {irradiance} W/m², opening = {opening} m²");

    let mut section = Section::new(3);
    section
        .quantity(
            format!("Irradiance at {distance} m"),
            irradiance,
            "W/m²",
            Notation::Fixed(6),
        )
        .quantity(
            "Power through opening",
            through_opening,
            "W",
            Notation::Fixed(6),
        );
    Ok(section)
}

/// 200 W lamp over a table 2 m below, radiometric and photometric
pub fn part4() -> Result<Section> {
    const LUMINOSITY: f64 = 0.1;
    let lamp = IsotropicPointSource::new(radiant_power(200.0, 0.20));
    let distance = 2.0;

    let radiometric = irradiance_from_intensity(lamp.intensity(), distance)?;
    let photometric = illuminance(radiometric, LUMINOSITY);
    log::debug!("part 4: I = {} W/sr", lamp.intensity());

    let mut section = Section::new(4);
    section
        .blank()
        .quantity(
            "Irradiance at table (E_radiometric)",
            radiometric,
            "W/m²",
            Notation::Fixed(6),
        )
        .quantity(
            "Illuminance at table (E_photometric)",
            photometric,
            "lux",
            Notation::Fixed(2),
        );
    Ok(section)
}

/// Inverse-square rescaling of a 40 lux reading
pub fn part5() -> Result<Section> {
    let known_distance = 0.35;
    let new_distance = 0.65;
    let lux = inverse_square(40.0, known_distance, new_distance)?;

    let label = format!("New intensity at {new_distance} m");
    let mut section = Section::new(5);
    section.quantity(label, lux, "lux", Notation::Fixed(2));
    Ok(section)
}

/// 10 cm square Lambertian panel at 5000 W/(sr·m²)
pub fn part6() -> Result<Section> {
    let panel = LambertianEmitter::rectangle(5000.0, 0.10, 0.10)?;
    let duration = 1.0;

    let mut section = Section::new(6);
    section
        .quantity(
            "Radiance (L)",
            panel.radiance,
            "W/(sr·m²)",
            Notation::Fixed(2),
        )
        .quantity(
            "Radiant exitance / Radiosity (M)",
            panel.exitance(),
            "W/m²",
            Notation::Fixed(2),
        )
        .quantity("Emitter area (A)", panel.area, "m²", Notation::Fixed(4))
        .quantity("Radiant flux (Φ)", panel.flux(), "W", Notation::Fixed(4))
        .quantity(
            "Emitted energy in 1 s (E)",
            panel.energy(duration),
            "J",
            Notation::Fixed(4),
        );
    Ok(section)
}

/// The same panel driven to 6000 W/(sr·m²)
pub fn part7() -> Result<Section> {
    let panel = LambertianEmitter::rectangle(6000.0, 0.10, 0.10)?;

    let mut section = Section::new(7);
    section
        .quantity(
            "Radiant exitance (M)",
            panel.exitance(),
            "W/m²",
            Notation::Fixed(2),
        )
        .quantity(
            "Power of the source (Φ)",
            panel.flux(),
            "W",
            Notation::Fixed(2),
        );
    Ok(section)
}

/// Sunlight at Earth and at Mars
///
/// Earth receives more because irradiance falls with the square of the
/// distance from the Sun.
pub fn part8() -> Result<Section> {
    let sun = SphericalEmitter::new(SUN_FLUX, SUN_AREA)?;
    let radius = sun.radius();
    let radiance = sun.radiance();
    let omega_earth = sun.solid_angle_at(EARTH_DISTANCE)?.steradians();
    let omega_mars = sun.solid_angle_at(MARS_DISTANCE)?.steradians();
    let earth = sun.irradiance_at(EARTH_DISTANCE)?;
    let mars = sun.irradiance_at(MARS_DISTANCE)?;
    log::debug!("part 8: R = {radius} m, L = {radiance} W/(sr·m²)");

    let mut section = Section::new(8);
    section
        .quantity("Sun radius", radius, "m", Notation::Scientific(3))
        .quantity(
            "Radiant exitance (M)",
            sun.exitance(),
            "W/m²",
            Notation::Scientific(3),
        )
        .quantity(
            "Radiance (L)",
            radiance,
            "W/(sr·m²)",
            Notation::Scientific(3),
        )
        .blank()
        .quantity(
            "Solid angle at Earth (Ω_E)",
            omega_earth,
            "sr",
            Notation::Scientific(3),
        )
        .quantity(
            "Solid angle at Mars  (Ω_M)",
            omega_mars,
            "sr",
            Notation::Scientific(3),
        )
        .blank()
        .quantity("Irradiance at Earth", earth, "W/m²", Notation::Fixed(3))
        .quantity("Irradiance at Mars ", mars, "W/m²", Notation::Fixed(3))
        .blank()
        .quantity(
            "Energy on 1 m² in 1 s (Earth)",
            energy(earth, 1.0),
            "J",
            Notation::Fixed(3),
        )
        .quantity(
            "Energy on 1 m² in 1 s (Mars) ",
            energy(mars, 1.0),
            "J",
            Notation::Fixed(3),
        );
    Ok(section)
}

/// Uniform sky of 1000 W/(sr·m²), whole hemisphere and a 30° cone
pub fn part9() -> Result<Section> {
    let radiance = 1000.0;
    let half_angle = Angle::from_degrees(30.0);

    let full_sky = sky_irradiance(radiance, PI);
    let cone = sky_irradiance(radiance, projected_cone(half_angle));
    log::trace!(
        "part 9: cone covers {} sr",
        SolidAngle::cone(half_angle).steradians()
    );

    let mut section = Section::new(9);
    section
        .quantity(
            "Irradiance (full sky)",
            full_sky,
            "W/m²",
            Notation::Fixed(2),
        )
        .quantity(
            format!("Irradiance (cone, {}°)", half_angle.to_degrees()),
            cone,
            "W/m²",
            Notation::Fixed(2),
        );
    Ok(section)
}
