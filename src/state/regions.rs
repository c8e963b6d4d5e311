//! Static reference data for administrative regions
//!
//! The table is built once and shared behind an `Arc`; the store only ever
//! reads from it to resolve a selected code into a display name.

/// A single administrative region (Brazilian federative unit)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub code: String,
    pub name: String,
}

/// Immutable, ordered table of regions
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    regions: Vec<Region>,
}

const BRAZIL: [(&str, &str); 27] = [
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AP", "Amapá"),
    ("AM", "Amazonas"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MT", "Mato Grosso"),
    ("MS", "Mato Grosso do Sul"),
    ("MG", "Minas Gerais"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PR", "Paraná"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RS", "Rio Grande do Sul"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("SC", "Santa Catarina"),
    ("SP", "São Paulo"),
    ("SE", "Sergipe"),
    ("TO", "Tocantins"),
];

impl RegionTable {
    /// Build a table from `(code, name)` pairs, keeping their order
    pub fn new<I, C, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        Self {
            regions: entries
                .into_iter()
                .map(|(code, name)| Region {
                    code: code.into(),
                    name: name.into(),
                })
                .collect(),
        }
    }

    /// The 27 Brazilian federative units
    pub fn brazil() -> Self {
        Self::new(BRAZIL)
    }

    /// Resolve a code to its display name
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.regions
            .iter()
            .find(|r| r.code == code)
            .map(|r| r.name.as_str())
    }

    pub fn position(&self, code: &str) -> Option<usize> {
        self.regions.iter().position(|r| r.code == code)
    }

    pub fn get(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Code following `current` in table order, wrapping around.
    /// With no current selection the first region is returned.
    pub fn next_code(&self, current: Option<&str>) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        let index = match current.and_then(|c| self.position(c)) {
            Some(i) => (i + 1) % self.len(),
            None => 0,
        };
        self.get(index).map(|r| r.code.as_str())
    }

    /// Code preceding `current` in table order, wrapping around.
    /// With no current selection the last region is returned.
    pub fn prev_code(&self, current: Option<&str>) -> Option<&str> {
        let last = self.len().checked_sub(1)?;
        let index = match current.and_then(|c| self.position(c)) {
            Some(0) | None => last,
            Some(i) => i - 1,
        };
        self.get(index).map(|r| r.code.as_str())
    }
}
