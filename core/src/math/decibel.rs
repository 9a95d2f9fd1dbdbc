/// Decibel conversions shared by the formula modules.
pub struct DecibelHelper;

impl DecibelHelper {
    /// Power ratio to dB. Callers guard against non-positive input.
    pub fn power_db(ratio: f64) -> f64 {
        10.0 * ratio.log10()
    }

    /// Field (amplitude) ratio to dB.
    pub fn field_db(ratio: f64) -> f64 {
        20.0 * ratio.log10()
    }

    /// dB back to a linear power ratio.
    pub fn power_linear(db: f64) -> f64 {
        10f64.powf(db / 10.0)
    }

    pub fn watts_to_dbm(watts: f64) -> f64 {
        Self::power_db(watts * 1000.0)
    }

    pub fn watts_to_dbw(watts: f64) -> f64 {
        Self::power_db(watts)
    }
}
