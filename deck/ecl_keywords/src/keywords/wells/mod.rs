//! Well definitions and controls: WELSPECS, COMPDAT, WCONINJE, WCONPROD,
//! WELTARG, WELOPEN, WGRUPCON.
//!
//! All are named records keyed by well name. A well may appear more than
//! once; later records override earlier ones, so records stay in deck
//! order.

use ecl_diagnostic::{DeckError, DeckErrorKind};
use ecl_units::UnitMultipliers;

use super::{as_index, read_records, NO_LIMIT};
use crate::{DeckReader, DeckWriter, Defaulted, SpecialKeyword};

/// One line per record, then the closing `/`.
macro_rules! write_records {
    ($out:ident, $records:expr, |$r:ident| $body:expr) => {
        for $r in $records {
            $body;
            $out.end_record();
        }
        $out.end_list();
    };
}

// === WELSPECS ===

#[derive(Clone, Debug, PartialEq)]
pub struct WelspecsRecord {
    pub well: String,
    pub group: String,
    pub i: Defaulted<i32>,
    pub j: Defaulted<i32>,
    /// Reference depth for bottom hole pressure; `-1` means the top
    /// connection.
    pub datum_depth: Defaulted<f64>,
    pub preferred_phase: String,
    pub drainage_radius: Defaulted<f64>,
    pub inflow_equation: Defaulted<String>,
    pub shut_in: Defaulted<String>,
    pub crossflow: Defaulted<String>,
    pub pvt_table: Defaulted<i32>,
    pub density_calculation: Defaulted<String>,
    pub fip_region: Defaulted<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Welspecs {
    pub records: Vec<WelspecsRecord>,
}

impl SpecialKeyword for Welspecs {
    const NAME: &'static str = "WELSPECS";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_records(reader, |record, well| {
            let group = record.required_string("group name")?;
            let mut head = [Defaulted::Default(1); 2];
            record.numbers(&mut head)?;
            let [i, j] = head;
            Ok(WelspecsRecord {
                well,
                group,
                i,
                j,
                datum_depth: record.number(-1.0)?,
                preferred_phase: record.required_string("preferred phase")?,
                drainage_radius: record.number(0.0)?,
                inflow_equation: record.string("STD")?,
                shut_in: record.string("SHUT")?,
                crossflow: record.string("YES")?,
                pvt_table: record.number(0)?,
                density_calculation: record.string("SEG")?,
                fip_region: record.number(0)?,
            })
        })?;
        Ok(Welspecs { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        write_records!(out, &self.records, |r| {
            out.field(&r.well)
                .field(&r.group)
                .field(&r.i)
                .field(&r.j)
                .field(&r.datum_depth)
                .field(&r.preferred_phase)
                .field(&r.drainage_radius)
                .field(&r.inflow_equation)
                .field(&r.shut_in)
                .field(&r.crossflow)
                .field(&r.pvt_table)
                .field(&r.density_calculation)
                .field(&r.fip_region)
        });
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for r in &mut self.records {
            r.datum_depth.scale(units.length);
            r.drainage_radius.scale(units.length);
        }
        Ok(())
    }
}

// === COMPDAT ===

#[derive(Clone, Debug, PartialEq)]
pub struct CompdatRecord {
    pub well: String,
    /// I, J, K1, K2. Defaulted I and J come from WELSPECS.
    pub location: [Defaulted<i32>; 4],
    pub state: Defaulted<String>,
    /// `-1` when defaulted: no table of its own.
    pub sat_table: Defaulted<i32>,
    pub transmissibility_factor: Defaulted<f64>,
    pub diameter: Defaulted<f64>,
    pub kh: Defaulted<f64>,
    pub skin: Defaulted<f64>,
    pub d_factor: Defaulted<f64>,
    pub direction: Defaulted<String>,
    /// Pressure equivalent radius.
    pub r0: Defaulted<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Compdat {
    pub records: Vec<CompdatRecord>,
}

impl SpecialKeyword for Compdat {
    const NAME: &'static str = "COMPDAT";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_records(reader, |record, well| {
            let mut location = [Defaulted::Default(0); 4];
            record.numbers(&mut location)?;
            let state = record.string("OPEN")?;
            let sat_table = record.number(-1)?;
            let mut reals = [
                Defaulted::Default(0.0),
                Defaulted::Default(0.0),
                Defaulted::Default(-1.0),
                Defaulted::Default(0.0),
                Defaulted::Default(-1.0e100),
            ];
            record.numbers(&mut reals)?;
            let [transmissibility_factor, diameter, kh, skin, d_factor] = reals;
            Ok(CompdatRecord {
                well,
                location,
                state,
                sat_table,
                transmissibility_factor,
                diameter,
                kh,
                skin,
                d_factor,
                direction: record.string("Z")?,
                r0: record.number(-1.0)?,
            })
        })?;
        Ok(Compdat { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        write_records!(out, &self.records, |r| {
            out.field(&r.well)
                .fields(&r.location)
                .field(&r.state)
                .field(&r.sat_table)
                .field(&r.transmissibility_factor)
                .field(&r.diameter)
                .field(&r.kh)
                .field(&r.skin)
                .field(&r.d_factor)
                .field(&r.direction)
                .field(&r.r0)
        });
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for r in &mut self.records {
            r.transmissibility_factor.scale(units.transmissibility);
            r.diameter.scale(units.length);
            r.kh.scale(units.permeability * units.length);
            r.r0.scale(units.length);
        }
        Ok(())
    }
}

// === WCONINJE ===

#[derive(Clone, Debug, PartialEq)]
pub struct WconinjeRecord {
    pub well: String,
    /// `WATER`, `GAS`, `OIL` or `MULTI`.
    pub injector_type: String,
    pub state: Defaulted<String>,
    pub control: String,
    pub surface_rate: Defaulted<f64>,
    pub reservoir_rate: Defaulted<f64>,
    pub bhp: Defaulted<f64>,
    pub thp: Defaulted<f64>,
    pub vfp_table: Defaulted<i32>,
    /// Vaporised oil in injected gas, or dissolved gas in injected oil.
    pub concentration: Defaulted<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wconinje {
    pub records: Vec<WconinjeRecord>,
}

impl SpecialKeyword for Wconinje {
    const NAME: &'static str = "WCONINJE";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_records(reader, |record, well| {
            let injector_type = record.required_string("injector type")?;
            let state = record.string("OPEN")?;
            let control = record.required_string("control mode")?;
            let mut values = [
                Defaulted::Default(NO_LIMIT),
                Defaulted::Default(NO_LIMIT),
                Defaulted::Default(6891.0),
                Defaulted::Default(NO_LIMIT),
                Defaulted::Default(0.0),
                Defaulted::Default(0.0),
            ];
            record.numbers(&mut values)?;
            let [surface_rate, reservoir_rate, bhp, thp, vfp_table, concentration] = values;
            Ok(WconinjeRecord {
                well,
                injector_type,
                state,
                control,
                surface_rate,
                reservoir_rate,
                bhp,
                thp,
                vfp_table: vfp_table.map(as_index),
                concentration,
            })
        })?;
        Ok(Wconinje { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        write_records!(out, &self.records, |r| {
            out.field(&r.well)
                .field(&r.injector_type)
                .field(&r.state)
                .field(&r.control)
                .field(&r.surface_rate)
                .field(&r.reservoir_rate)
                .field(&r.bhp)
                .field(&r.thp)
                .field(&r.vfp_table)
                .field(&r.concentration)
        });
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        for r in &mut self.records {
            r.surface_rate
                .scale(units.injection_rate(&r.injector_type));
            r.reservoir_rate.scale(units.reservoir_rate());
            r.bhp.scale(units.pressure);
            r.thp.scale(units.pressure);
            r.concentration.scale(units.gasvol_s / units.liqvol_s);
        }
        Ok(())
    }
}

// === WCONPROD ===

#[derive(Clone, Debug, PartialEq)]
pub struct WconprodRecord {
    pub well: String,
    pub state: Defaulted<String>,
    pub control: String,
    pub oil_rate: Defaulted<f64>,
    pub water_rate: Defaulted<f64>,
    pub gas_rate: Defaulted<f64>,
    pub liquid_rate: Defaulted<f64>,
    pub reservoir_rate: Defaulted<f64>,
    pub bhp: Defaulted<f64>,
    pub thp: Defaulted<f64>,
    pub vfp_table: Defaulted<i32>,
    /// Artificial lift quantity.
    pub alq: Defaulted<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wconprod {
    pub records: Vec<WconprodRecord>,
}

/// Numeric items of a WCONPROD record, kept or not.
const WCONPROD_ITEMS: usize = 14;

impl SpecialKeyword for Wconprod {
    const NAME: &'static str = "WCONPROD";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_records(reader, |record, well| {
            let state = record.string("OPEN")?;
            let control = record.required_string("control mode")?;
            let mut values = [Defaulted::Default(NO_LIMIT); WCONPROD_ITEMS];
            values[5] = Defaulted::Default(1.0);
            values[6] = Defaulted::Default(0.0);
            values[7] = Defaulted::Default(0.0);
            values[8] = Defaulted::Default(0.0);
            record.numbers(&mut values)?;
            Ok(WconprodRecord {
                well,
                state,
                control,
                oil_rate: values[0],
                water_rate: values[1],
                gas_rate: values[2],
                liquid_rate: values[3],
                reservoir_rate: values[4],
                bhp: values[5],
                thp: values[6],
                vfp_table: values[7].map(as_index),
                alq: values[8],
            })
        })?;
        Ok(Wconprod { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        write_records!(out, &self.records, |r| {
            out.field(&r.well)
                .field(&r.state)
                .field(&r.control)
                .field(&r.oil_rate)
                .field(&r.water_rate)
                .field(&r.gas_rate)
                .field(&r.liquid_rate)
                .field(&r.reservoir_rate)
                .field(&r.bhp)
                .field(&r.thp)
                .field(&r.vfp_table)
                .field(&r.alq)
        });
    }

    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        let lrat = units.liquid_rate();
        for r in &mut self.records {
            r.oil_rate.scale(lrat);
            r.water_rate.scale(lrat);
            r.gas_rate.scale(units.gas_rate());
            r.liquid_rate.scale(lrat);
            r.reservoir_rate.scale(units.reservoir_rate());
            r.bhp.scale(units.pressure);
            r.thp.scale(units.pressure);
        }
        Ok(())
    }
}

// === WELTARG ===

#[derive(Clone, Debug, PartialEq)]
pub struct WeltargRecord {
    pub well: String,
    /// The control or limit to change: `ORAT`, `BHP`, ...
    pub control: String,
    pub value: Defaulted<f64>,
}

impl WeltargRecord {
    /// Multiplier of the value, chosen by the control's first letter.
    fn multiplier(&self, units: &UnitMultipliers) -> Option<f64> {
        match self.control.bytes().next()?.to_ascii_uppercase() {
            b'O' | b'W' | b'L' => Some(units.liquid_rate()),
            b'G' => Some(units.gas_rate()),
            b'R' => Some(units.reservoir_rate()),
            b'B' | b'T' => Some(units.pressure),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Weltarg {
    pub records: Vec<WeltargRecord>,
}

impl SpecialKeyword for Weltarg {
    const NAME: &'static str = "WELTARG";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_records(reader, |record, well| {
            Ok(WeltargRecord {
                well,
                control: record.required_string("control quantity")?,
                value: record.number(-1.0)?,
            })
        })?;
        Ok(Weltarg { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        write_records!(out, &self.records, |r| {
            out.field(&r.well).field(&r.control).field(&r.value)
        });
    }

    /// Fails without touching any record when one control has no known
    /// quantity.
    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        let factors = self
            .records
            .iter()
            .map(|r| {
                r.multiplier(units).ok_or_else(|| {
                    DeckError::new(DeckErrorKind::unsupported(format!(
                        "unknown control or constraint `{}` for well {}",
                        r.control, r.well
                    )))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        for (r, factor) in self.records.iter_mut().zip(factors) {
            r.value.scale(factor);
        }
        Ok(())
    }
}

// === WELOPEN ===

#[derive(Clone, Debug, PartialEq)]
pub struct WelopenRecord {
    pub well: String,
    pub state: Defaulted<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Welopen {
    pub records: Vec<WelopenRecord>,
}

impl SpecialKeyword for Welopen {
    const NAME: &'static str = "WELOPEN";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_records(reader, |record, well| {
            Ok(WelopenRecord {
                well,
                state: record.string("OPEN")?,
            })
        })?;
        Ok(Welopen { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        write_records!(out, &self.records, |r| out.field(&r.well).field(&r.state));
    }

    fn convert_to_si(&mut self, _units: &UnitMultipliers) -> Result<(), DeckError> {
        Ok(())
    }
}

// === WGRUPCON ===

#[derive(Clone, Debug, PartialEq)]
pub struct WgrupconRecord {
    pub well: String,
    /// `YES` or `NO`.
    pub available: Defaulted<String>,
    pub guide_rate: Defaulted<f64>,
    pub phase: Defaulted<String>,
}

impl WgrupconRecord {
    pub fn is_available(&self) -> bool {
        self.available.as_str() == "YES"
    }
}

/// Well guide rates for group control.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wgrupcon {
    pub records: Vec<WgrupconRecord>,
}

impl SpecialKeyword for Wgrupcon {
    const NAME: &'static str = "WGRUPCON";

    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError> {
        let records = read_records(reader, |record, well| {
            Ok(WgrupconRecord {
                well,
                available: record.string("YES")?,
                guide_rate: record.number(1.0e20)?,
                phase: record.string("")?,
            })
        })?;
        Ok(Wgrupcon { records })
    }

    fn write(&self, out: &mut DeckWriter) {
        out.keyword(Self::NAME);
        write_records!(out, &self.records, |r| {
            out.field(&r.well)
                .field(&r.available)
                .field(&r.guide_rate)
                .field(&r.phase)
        });
    }

    fn convert_to_si(&mut self, _units: &UnitMultipliers) -> Result<(), DeckError> {
        Ok(())
    }
}
