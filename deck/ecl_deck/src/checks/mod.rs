//! Physical checks spanning more than one keyword.

use ecl_diagnostic::{DeckError, DeckErrorKind};
use ecl_keywords::keywords::{Sgof, Swof};

/// Allowed mismatch between the SGOF and SWOF saturation ranges.
const SATURATION_TOLERANCE: f64 = 1e-3;

/// The maximum gas saturation of SGOF must leave exactly the connate water
/// saturation of SWOF, region by region.
pub fn check_saturation_endpoints(swof: &Swof, sgof: &Sgof) -> Result<(), DeckError> {
    let regions = swof.table.num_regions().min(sgof.table.num_regions());
    for r in 0..regions {
        let (Some(swco), Some(sg_max)) = (swof.connate_water(r), sgof.max_gas(r)) else {
            continue;
        };
        if (sg_max + swco - 1.0).abs() > SATURATION_TOLERANCE {
            return Err(DeckError::new(DeckErrorKind::inconsistent(format!(
                "maximum gas saturation {sg_max} in SGOF region {} should equal \
                 1 - connate water saturation = {}",
                r + 1,
                1.0 - swco
            )))
            .in_keyword("SGOF"));
        }
    }
    Ok(())
}
