//! The closed set of supported keywords.
//!
//! Each keyword is a type implementing [`SpecialKeyword`]. The `keywords!`
//! list below generates the [`Keyword`] enum holding any of them, the
//! [`KeywordKind`] tag used for name lookup, and the forwarding `match`es.

use ecl_diagnostic::DeckError;
use ecl_units::UnitMultipliers;
use tracing::debug;

use crate::keywords::{
    Compdat, Dates, Density, Endscale, Enkrvd, Enptvd, Equil, Faults, Gconinje, Gconprod,
    Gruptree, Ignored, Multflt, Plyads, Plymax, Plyrock, Plyvisc, Pvcdo, Pvdg, Pvdo, Pvtg, Pvto,
    Pvtw, Rock, Rocktab, Scalecrs, Sgof, Specgrid, Start, Swof, Title, Tlmixpar, Tstep, Wconinje,
    Wconprod, Welopen, Welspecs, Weltarg, Wgrupcon, Wpolymer,
};
use crate::{DeckReader, DeckWriter};

/// Read, write and unit conversion of one keyword.
pub trait SpecialKeyword: Sized {
    /// Keyword name as written in the deck.
    const NAME: &'static str;

    /// Read the keyword body; the reader is positioned just after the name
    /// line.
    fn read(reader: &mut DeckReader<'_>) -> Result<Self, DeckError>;

    /// Write the keyword name and body.
    fn write(&self, out: &mut DeckWriter);

    /// Rescale every numeric field from deck units to SI.
    ///
    /// Not idempotent: calling it twice scales twice. The owner of the
    /// keyword makes sure it runs once.
    fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError>;
}

/// Typed access into a [`Keyword`].
pub trait KeywordVariant: SpecialKeyword {
    fn from_keyword(keyword: &Keyword) -> Option<&Self>;
    fn from_keyword_mut(keyword: &mut Keyword) -> Option<&mut Self>;
}

/// Generate [`Keyword`], [`KeywordKind`] and their forwarding methods.
///
/// Each listed name is both the enum variant and the keyword type.
macro_rules! keywords {
    ($($variant:ident),* $(,)?) => {
        /// One parsed keyword.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Keyword {
            $($variant($variant),)*
            /// A keyword whose body is kept as raw text.
            Ignored(Ignored),
        }

        /// Tag of every keyword with a grammar of its own.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum KeywordKind {
            $($variant,)*
        }

        impl KeywordKind {
            pub const ALL: &[KeywordKind] = &[$(KeywordKind::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(KeywordKind::$variant => <$variant as SpecialKeyword>::NAME,)*
                }
            }

            fn read_body(self, reader: &mut DeckReader<'_>) -> Result<Keyword, DeckError> {
                match self {
                    $(KeywordKind::$variant => {
                        <$variant as SpecialKeyword>::read(reader).map(Keyword::$variant)
                    })*
                }
            }
        }

        impl Keyword {
            /// `None` for ignored keywords.
            pub fn kind(&self) -> Option<KeywordKind> {
                match self {
                    $(Keyword::$variant(_) => Some(KeywordKind::$variant),)*
                    Keyword::Ignored(_) => None,
                }
            }

            pub fn name(&self) -> &str {
                match self {
                    $(Keyword::$variant(_) => <$variant as SpecialKeyword>::NAME,)*
                    Keyword::Ignored(k) => &k.name,
                }
            }

            pub fn write(&self, out: &mut DeckWriter) {
                match self {
                    $(Keyword::$variant(k) => k.write(out),)*
                    Keyword::Ignored(k) => k.write(out),
                }
            }

            fn convert_body(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
                match self {
                    $(Keyword::$variant(k) => k.convert_to_si(units),)*
                    Keyword::Ignored(_) => Ok(()),
                }
            }
        }

        $(
            impl From<$variant> for Keyword {
                fn from(k: $variant) -> Self {
                    Keyword::$variant(k)
                }
            }

            impl KeywordVariant for $variant {
                fn from_keyword(keyword: &Keyword) -> Option<&Self> {
                    match keyword {
                        Keyword::$variant(k) => Some(k),
                        _ => None,
                    }
                }

                fn from_keyword_mut(keyword: &mut Keyword) -> Option<&mut Self> {
                    match keyword {
                        Keyword::$variant(k) => Some(k),
                        _ => None,
                    }
                }
            }
        )*
    };
}

keywords! {
    // Grid
    Specgrid, Faults, Multflt,
    // Run description and schedule
    Title, Start, Dates, Tstep,
    // Fluid and rock properties
    Density, Pvtw, Pvcdo, Rock, Pvdg, Pvdo, Rocktab, Pvto, Pvtg,
    // Saturation functions and end-point scaling
    Swof, Sgof, Endscale, Scalecrs, Enptvd, Enkrvd,
    // Initialisation
    Equil,
    // Wells and groups
    Welspecs, Compdat, Wconinje, Wconprod, Weltarg, Welopen, Wgrupcon,
    Gconinje, Gconprod, Gruptree,
    // Polymer
    Wpolymer, Plyvisc, Plyads, Plyrock, Plymax, Tlmixpar,
}

impl KeywordKind {
    /// The kind with this deck name, if it has a grammar of its own.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Read this keyword's body, naming it in any error.
    pub fn read(self, reader: &mut DeckReader<'_>) -> Result<Keyword, DeckError> {
        reader.enter_keyword(self.name());
        let keyword = self.read_body(reader);
        reader.leave_keyword();
        keyword
    }
}

impl Keyword {
    /// Read the body of keyword `name`.
    ///
    /// Names without a grammar are scanned past and kept as
    /// [`Keyword::Ignored`].
    pub fn read<'a>(name: &'a str, reader: &mut DeckReader<'a>) -> Result<Keyword, DeckError> {
        if let Some(kind) = KeywordKind::from_name(name) {
            return kind.read(reader);
        }
        if !Ignored::is_known(name) {
            debug!(keyword = name, "no grammar for keyword, skipping its records");
        }
        reader.enter_keyword(name);
        let keyword = Ignored::read_named(name, reader).map(Keyword::Ignored);
        reader.leave_keyword();
        keyword
    }

    /// See [`SpecialKeyword::convert_to_si`].
    pub fn convert_to_si(&mut self, units: &UnitMultipliers) -> Result<(), DeckError> {
        let result = self.convert_body(units);
        result.map_err(|err| err.in_keyword(self.name()))
    }

    /// Typed view of this keyword.
    pub fn as_variant<K: KeywordVariant>(&self) -> Option<&K> {
        K::from_keyword(self)
    }
}

impl From<Ignored> for Keyword {
    fn from(k: Ignored) -> Self {
        Keyword::Ignored(k)
    }
}
