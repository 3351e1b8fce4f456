use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

use machbar_core::{MachbarError, Result};

use crate::builtin;
use crate::definition::{InhouseSkill, PartnerSkill};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    inhouse: builtin::inhouse(),
    external: builtin::external(),
});

/// The skill catalog: an ordered table of in-house skills and one of partner skills.
///
/// Order matters: match results are reported in catalog order and the first
/// matched partner skill drives the external branches of the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    inhouse: Vec<InhouseSkill>,
    #[serde(default)]
    external: Vec<PartnerSkill>,
}

/// Entries of a [`Catalog`] whose keywords occur in a request, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct CatalogMatches<'a> {
    pub inhouse: Vec<&'a InhouseSkill>,
    pub external: Vec<&'a PartnerSkill>,
}

impl CatalogMatches<'_> {
    pub fn is_empty(&self) -> bool {
        self.inhouse.is_empty() && self.external.is_empty()
    }

    pub fn inhouse_names(&self) -> Vec<String> {
        self.inhouse.iter().map(|s| s.name.clone()).collect()
    }

    pub fn external_names(&self) -> Vec<String> {
        self.external.iter().map(|s| s.name.clone()).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The catalog that ships with the binary.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Build a catalog from explicit tables, validating them.
    pub fn new(inhouse: Vec<InhouseSkill>, external: Vec<PartnerSkill>) -> Result<Self> {
        let catalog = Self { inhouse, external };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file with `[[inhouse]]` and `[[external]]` tables.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            MachbarError::Catalog(format!("failed to read {}: {}", path.display(), e))
        })?;
        let catalog = Self::parse(&raw).map_err(|e| match e {
            MachbarError::Catalog(msg) => {
                MachbarError::Catalog(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        info!(
            path = ?path,
            inhouse = catalog.inhouse.len(),
            external = catalog.external.len(),
            "loaded skill catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate catalog TOML.
    pub fn parse(raw: &str) -> Result<Self> {
        let catalog: Catalog =
            toml::from_str(raw).map_err(|e| MachbarError::Catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise use the built-in catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                debug!("using built-in skill catalog");
                Ok(Self::builtin())
            }
        }
    }

    /// Check the invariants matching relies on.
    ///
    /// An empty keyword would match every request and an upper-case one
    /// could never match, since requests are lower-cased before matching.
    pub fn validate(&self) -> Result<()> {
        if self.inhouse.is_empty() && self.external.is_empty() {
            return Err(invalid("catalog", "catalog has no entries"));
        }

        let mut names = HashSet::new();
        for (i, skill) in self.inhouse.iter().enumerate() {
            let field = format!("inhouse[{i}]");
            check_name(&field, &skill.name, &mut names)?;
            if skill.avg_hours == 0 {
                return Err(invalid(
                    &format!("{field}.avg_hours"),
                    &format!("'{}' has zero average hours", skill.name),
                ));
            }
            check_keywords(&field, &skill.name, &skill.keywords)?;
        }
        for (i, skill) in self.external.iter().enumerate() {
            let field = format!("external[{i}]");
            check_name(&field, &skill.name, &mut names)?;
            if skill.partner.trim().is_empty() {
                return Err(invalid(
                    &format!("{field}.partner"),
                    &format!("'{}' has no partner", skill.name),
                ));
            }
            check_keywords(&field, &skill.name, &skill.keywords)?;
        }
        Ok(())
    }

    pub fn inhouse(&self) -> &[InhouseSkill] {
        &self.inhouse
    }

    pub fn external(&self) -> &[PartnerSkill] {
        &self.external
    }

    /// Total number of entries across both tables.
    pub fn count(&self) -> usize {
        self.inhouse.len() + self.external.len()
    }

    /// Collect every entry matching `lower`, which must already be lower-cased.
    pub fn match_request<'a>(&'a self, lower: &str) -> CatalogMatches<'a> {
        CatalogMatches {
            inhouse: self.inhouse.iter().filter(|s| s.matches(lower)).collect(),
            external: self.external.iter().filter(|s| s.matches(lower)).collect(),
        }
    }

    /// Serialize the catalog in the same TOML layout [`Catalog::parse`] reads.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| MachbarError::Catalog(e.to_string()))
    }
}

fn invalid(field: &str, reason: &str) -> MachbarError {
    MachbarError::CatalogValidation {
        field: field.into(),
        reason: reason.into(),
    }
}

fn check_name<'a>(field: &str, name: &'a str, seen: &mut HashSet<&'a str>) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid(&format!("{field}.name"), "name is empty"));
    }
    if !seen.insert(name) {
        return Err(invalid(
            &format!("{field}.name"),
            &format!("duplicate skill name '{name}'"),
        ));
    }
    Ok(())
}

fn check_keywords(field: &str, name: &str, keywords: &[String]) -> Result<()> {
    let field = format!("{field}.keywords");
    if keywords.is_empty() {
        return Err(invalid(&field, &format!("'{name}' has no keywords")));
    }
    for kw in keywords {
        if kw.trim().is_empty() {
            return Err(invalid(&field, &format!("'{name}' has an empty keyword")));
        }
        if *kw != kw.to_lowercase() {
            return Err(invalid(
                &field,
                &format!("keyword '{kw}' of '{name}' must be lower-case"),
            ));
        }
    }
    Ok(())
}
