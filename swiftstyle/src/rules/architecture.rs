//! Clean Architecture layering rules.
//!
//! Layer membership is decided from path components before parsing; the rules
//! here only inspect `import` statements, so a file outside any configured
//! layer directory is never flagged.

use super::{create_finding, ids, Context, Finding, Rule, RuleMetadata};
use crate::config::LayersConfig;
use crate::constants::IMPORT_KIND_SPECIFIERS;
use crate::syntax::{SwiftFile, Token};
use std::path::Path;

const META_DOMAIN_IMPORTS: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_DOMAIN_IMPORTS,
};
const META_LAYER_DIRECTION: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_LAYER_DIRECTION,
};

/// Clean Architecture layer a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Persistence and networking.
    Data,
    /// Entities and use cases, framework-free.
    Domain,
    /// Views, view models, UI plumbing.
    Presentation,
}

/// Classifies a path by its directory components. The first matching
/// component wins, walking from the root down.
#[must_use]
pub fn layer_of_path(path: &Path, layers: &LayersConfig) -> Option<Layer> {
    for component in path.components() {
        let name = component.as_os_str().to_string_lossy();
        if layers.domain_dirs.iter().any(|d| d == name.as_ref()) {
            return Some(Layer::Domain);
        }
        if layers.data_dirs.iter().any(|d| d == name.as_ref()) {
            return Some(Layer::Data);
        }
        if layers.presentation_dirs.iter().any(|d| d == name.as_ref()) {
            return Some(Layer::Presentation);
        }
    }
    None
}

/// An `import` statement reduced to its top-level module name.
struct Import<'t> {
    module: &'t str,
    line: usize,
    col: usize,
}

/// Collects imports from the token stream. Handles kind specifiers
/// (`import class UIKit.UIView`) and takes only the first path segment,
/// since layering is decided per module.
fn collect_imports<'t>(toks: &[&'t Token]) -> Vec<Import<'t>> {
    let mut imports = Vec::new();
    for (i, t) in toks.iter().enumerate() {
        if !t.is_anon("import") {
            continue;
        }
        let mut j = i + 1;
        if toks
            .get(j)
            .is_some_and(|n| IMPORT_KIND_SPECIFIERS().iter().any(|kw| n.is_anon(kw)))
        {
            j += 1;
        }
        let Some(module) = toks.get(j) else {
            continue;
        };
        if !module.is_identifier() || module.line != t.line {
            continue;
        }
        imports.push(Import {
            module: module.text.as_str(),
            line: module.line,
            col: module.col,
        });
    }
    imports
}

/// Returns the Clean Architecture rules.
#[must_use]
pub fn get_architecture_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(DomainImportsRule), Box::new(LayerDirectionRule)]
}

/// Restricts Domain files to the allow-listed imports (Foundation by
/// default). The Domain layer stays framework-free so entities and use
/// cases compile and test without the app shell.
struct DomainImportsRule;

impl Rule for DomainImportsRule {
    fn name(&self) -> &'static str {
        "DomainImportsRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_DOMAIN_IMPORTS
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        if context.layer != Some(Layer::Domain) {
            return None;
        }
        let layers = &context.config.style.layers;
        let findings: Vec<Finding> = collect_imports(&file.code_tokens())
            .iter()
            .filter(|imp| !layers.domain_allowed_imports.iter().any(|m| m == imp.module))
            .map(|imp| {
                create_finding(
                    &format!("Domain layer must not import '{}'", imp.module),
                    META_DOMAIN_IMPORTS,
                    context,
                    imp.line,
                    imp.col,
                )
            })
            .collect();
        (!findings.is_empty()).then_some(findings)
    }
}

/// Checks the dependency direction between the outer layers: Presentation
/// must not reach into persistence/networking modules, and Data must not
/// import UI frameworks.
struct LayerDirectionRule;

impl Rule for LayerDirectionRule {
    fn name(&self) -> &'static str {
        "LayerDirectionRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_LAYER_DIRECTION
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        let layers = &context.config.style.layers;
        let (forbidden, reason): (&[String], &str) = match context.layer {
            Some(Layer::Presentation) => (
                &layers.data_modules,
                "Presentation layer reaches into the Data layer",
            ),
            Some(Layer::Data) => (
                &layers.ui_frameworks,
                "Data layer depends on a UI framework",
            ),
            _ => return None,
        };
        let findings: Vec<Finding> = collect_imports(&file.code_tokens())
            .iter()
            .filter(|imp| forbidden.iter().any(|m| m == imp.module))
            .map(|imp| {
                create_finding(
                    &format!("{reason}: import of '{}'", imp.module),
                    META_LAYER_DIRECTION,
                    context,
                    imp.line,
                    imp.col,
                )
            })
            .collect();
        (!findings.is_empty()).then_some(findings)
    }
}
