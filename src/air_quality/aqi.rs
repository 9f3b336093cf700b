use crate::units::round_half_up;

/// One US-EPA PM2.5 band: concentration range (µg/m³) to index range
struct Breakpoint {
    conc_lo: f64,
    conc_hi: f64,
    index_lo: f64,
    index_hi: f64,
}

const fn band(conc_lo: f64, conc_hi: f64, index_lo: f64, index_hi: f64) -> Breakpoint {
    Breakpoint {
        conc_lo,
        conc_hi,
        index_lo,
        index_hi,
    }
}

const PM25_BREAKPOINTS: [Breakpoint; 7] = [
    band(0.0, 12.0, 0.0, 50.0),
    band(12.1, 35.4, 51.0, 100.0),
    band(35.5, 55.4, 101.0, 150.0),
    band(55.5, 150.4, 151.0, 200.0),
    band(150.5, 250.4, 201.0, 300.0),
    band(250.5, 350.4, 301.0, 400.0),
    band(350.5, 500.4, 401.0, 500.0),
];

const AQI_MAX: i32 = 500;

/// AQI from a PM2.5 concentration; linear within the first band whose upper
/// bound is not exceeded, saturating at 500.
pub fn aqi_from_pm25(pm25: Option<f64>) -> Option<i32> {
    let pm25 = pm25?;

    let aqi = PM25_BREAKPOINTS
        .iter()
        .find(|b| pm25 <= b.conc_hi)
        .map(|b| {
            let slope = (b.index_hi - b.index_lo) / (b.conc_hi - b.conc_lo);
            round_half_up(slope * (pm25 - b.conc_lo) + b.index_lo) as i32
        })
        .unwrap_or(AQI_MAX);

    Some(aqi)
}
