//! Statically known draft fields.
//!
//! Any dotted path may be written to the draft, but the fields the rules
//! and front ends understand are listed here so callers do not have to
//! spell paths by hand.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Abstract,
    ExternalId,
    Embargo,
    FirstAuthor,
    CoAuthors,
    License,
    Variable,
    Keywords,
    Details,
    DataSource,
    DataSourceType,
    DataSourcePath,
    VariableNames,
    SpatialScale,
    SpatialDimensions,
    SpatialExtent,
    SpatialResolution,
    TemporalScale,
    TemporalDimensions,
    ObservationStart,
    ObservationEnd,
    TemporalResolution,
}

impl Field {
    pub const ALL: [Field; 23] = [
        Field::Title,
        Field::Abstract,
        Field::ExternalId,
        Field::Embargo,
        Field::FirstAuthor,
        Field::CoAuthors,
        Field::License,
        Field::Variable,
        Field::Keywords,
        Field::Details,
        Field::DataSource,
        Field::DataSourceType,
        Field::DataSourcePath,
        Field::VariableNames,
        Field::SpatialScale,
        Field::SpatialDimensions,
        Field::SpatialExtent,
        Field::SpatialResolution,
        Field::TemporalScale,
        Field::TemporalDimensions,
        Field::ObservationStart,
        Field::ObservationEnd,
        Field::TemporalResolution,
    ];

    /// Dotted path of this field in the draft tree.
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Abstract => "abstract",
            Self::ExternalId => "externalId",
            Self::Embargo => "embargo",
            Self::FirstAuthor => "firstAuthor",
            Self::CoAuthors => "coAuthors",
            Self::License => "license",
            Self::Variable => "variable",
            Self::Keywords => "keywords",
            Self::Details => "details",
            Self::DataSource => "dataSource",
            Self::DataSourceType => "dataSource.type",
            Self::DataSourcePath => "dataSource.path",
            Self::VariableNames => "dataSource.variableNames",
            Self::SpatialScale => "dataSource.spatialScale",
            Self::SpatialDimensions => "dataSource.spatialScale.dimensionNames",
            Self::SpatialExtent => "dataSource.spatialScale.extent",
            Self::SpatialResolution => "dataSource.spatialScale.resolutionMeters",
            Self::TemporalScale => "dataSource.temporalScale",
            Self::TemporalDimensions => "dataSource.temporalScale.dimensionNames",
            Self::ObservationStart => "dataSource.temporalScale.observationStart",
            Self::ObservationEnd => "dataSource.temporalScale.observationEnd",
            Self::TemporalResolution => "dataSource.temporalScale.resolution",
        }
    }

    /// Look up a known field by its dotted path.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        Self::ALL.into_iter().find(|field| field.path() == path)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_unique() {
        for (i, a) in Field::ALL.iter().enumerate() {
            for b in &Field::ALL[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }

    #[test]
    fn from_path_round_trips() {
        for field in Field::ALL {
            assert_eq!(Field::from_path(field.path()), Some(field));
        }
        assert_eq!(Field::from_path("dataSource.unknown"), None);
    }
}
