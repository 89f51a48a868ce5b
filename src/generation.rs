//! Platform generations and per-package support flags.

use std::fmt;

use serde::Serialize;

/// One of the fixed platform generations tracked by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Generation {
    #[serde(rename = "5.1")]
    V5_1,
    #[serde(rename = "5.2")]
    V5_2,
    #[serde(rename = "5.3")]
    V5_3,
    #[serde(rename = "5.4")]
    V5_4,
    #[serde(rename = "5.5")]
    V5_5,
}

impl Generation {
    /// All generations in column order.
    pub const ALL: [Generation; 5] = [
        Generation::V5_1,
        Generation::V5_2,
        Generation::V5_3,
        Generation::V5_4,
        Generation::V5_5,
    ];

    /// Column label, e.g. `5.3`.
    pub fn label(self) -> &'static str {
        match self {
            Generation::V5_1 => "5.1",
            Generation::V5_2 => "5.2",
            Generation::V5_3 => "5.3",
            Generation::V5_4 => "5.4",
            Generation::V5_5 => "5.5",
        }
    }

    /// Name of the directory under `ref` that marks support, e.g. `dotnet5.3`.
    pub fn marker_dir(self) -> String {
        format!("dotnet{}", self.label())
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which generations a single package ships a reference variant for.
///
/// Built once per package and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationFlags([bool; 5]);

impl GenerationFlags {
    /// Flags in [`Generation::ALL`] order.
    pub fn new(flags: [bool; 5]) -> Self {
        Self(flags)
    }

    /// No generation supported.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build flags by probing each generation in column order.
    ///
    /// Stops at the first error.
    pub fn try_from_fn<E>(
        mut probe: impl FnMut(Generation) -> std::result::Result<bool, E>,
    ) -> std::result::Result<Self, E> {
        let mut flags = [false; 5];
        for generation in Generation::ALL {
            flags[generation.index()] = probe(generation)?;
        }
        Ok(Self(flags))
    }

    /// Whether the given generation is supported.
    pub fn is_supported(&self, generation: Generation) -> bool {
        self.0[generation.index()]
    }

    /// Whether any generation is supported.
    pub fn any(&self) -> bool {
        self.0.iter().any(|&f| f)
    }

    /// `(generation, supported)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Generation, bool)> + '_ {
        Generation::ALL.into_iter().map(|g| (g, self.is_supported(g)))
    }

    /// Supported generations in column order.
    pub fn supported(&self) -> impl Iterator<Item = Generation> + '_ {
        self.iter().filter(|(_, s)| *s).map(|(g, _)| g)
    }
}
