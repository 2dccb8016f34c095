// src/models/terms.rs
// DOCUMENTATION: Closed vocabularies used by photographer and portfolio fields
// PURPOSE: Reject any value outside the fixed sets before it reaches the database

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string is not a member of a vocabulary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid {vocabulary}")]
pub struct UnknownTerm {
    pub vocabulary: &'static str,
    pub value: String,
}

/// Declares a vocabulary enum whose wire and database form is the given label.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownTerm;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(UnknownTerm {
                        vocabulary: $label,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Photographer genre
    Genre("genre") {
        Femenino => "Femenino",
        Masculino => "Masculino",
    }
}

vocabulary! {
    /// Photographer nationality
    Nationality("nationality") {
        Argentina => "Argentina",
        Australia => "Australia",
        Alemania => "Alemania",
        Brasil => "Brasil",
        Colombia => "Colombia",
        Canada => "Canadá",
        Chile => "Chile",
        China => "China",
        Cuba => "Cuba",
        Espania => "España",
        EstadosUnidos => "Estados Unidos",
        Francia => "Francia",
        Hungria => "Hungría",
        Italia => "Italia",
        Japon => "Japón",
        Mexico => "México",
        ReinoUnido => "Reino Unido",
    }
}

vocabulary! {
    /// Photographic style, used both for a photographer's style and a portfolio category
    PhotographicStyle("photographic style") {
        Arquitectonico => "Arquitectónico",
        Artistico => "Artístico",
        Callejero => "Callejero",
        Documental => "Documental",
        Directa => "Directa",
        Desnudos => "Desnudos",
        Publicitaria => "Publicitaria",
        Paisaje => "Paisaje",
        Retrato => "Retrato",
    }
}

/// Parse an optional database column into a vocabulary member
pub(crate) fn parse_optional<T>(value: Option<String>) -> Result<Option<T>, UnknownTerm>
where
    T: FromStr<Err = UnknownTerm>,
{
    value.map(|v| v.parse()).transpose()
}
