//! Designer-authored action chains.

use core::fmt;

use super::{ActionCommand, LocomotionFlags, LocomotionMode};
use crate::error::{ComboError, ErrorSeverity};

/// One position in a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionStep {
    /// Command that selects this step.
    pub command: ActionCommand,
    /// Animation index handed to the presentation layer while the step plays.
    pub animation_index: u32,
    /// The step only advances if the previous step registered a hit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires_hit: bool,
}

impl ActionStep {
    pub const fn new(command: ActionCommand, animation_index: u32) -> Self {
        Self {
            command,
            animation_index,
            requires_hit: false,
        }
    }

    /// Marks the step as requiring a confirmed hit (builder pattern).
    #[must_use]
    pub const fn on_hit(mut self) -> Self {
        self.requires_hit = true;
        self
    }
}

/// A named chain of steps triggerable by a matching command sequence.
///
/// # Invariants
///
/// - `steps` is never empty once the chain is part of an [`ActionCatalog`]
/// - `steps[0].command` is the opener
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionChain {
    /// Diagnostic name.
    pub name: String,
    /// Locomotion modes the chain may start from.
    pub start_flags: LocomotionFlags,
    pub steps: Vec<ActionStep>,
}

impl ActionChain {
    pub fn new(
        name: impl Into<String>,
        start_flags: LocomotionFlags,
        steps: Vec<ActionStep>,
    ) -> Self {
        Self {
            name: name.into(),
            start_flags,
            steps,
        }
    }

    /// The chain's first command, if any.
    pub fn opener(&self) -> Option<ActionCommand> {
        self.steps.first().map(|step| step.command)
    }

    /// Returns true if `command` issued from `mode` starts this chain.
    pub fn starts_with(&self, command: ActionCommand, mode: LocomotionMode) -> bool {
        self.start_flags.allows(mode) && self.opener() == Some(command)
    }

    /// Returns the step at `index` if it exists.
    pub fn step(&self, index: usize) -> Option<&ActionStep> {
        self.steps.get(index)
    }

    /// Renders the command sequence as designer codes, e.g. `F,F,S`.
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(self.steps.len() * 2);
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                code.push(',');
            }
            code.push(step.command.code());
        }
        code
    }
}

impl fmt::Display for ActionChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.code())
    }
}

/// Errors raised while validating a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("chain #{index} '{name}' has no steps")]
    EmptyChain { index: usize, name: String },
}

impl ComboError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyChain { .. } => "CATALOG_EMPTY_CHAIN",
        }
    }
}

/// Immutable ordered set of action chains.
///
/// Order is significant: when several chains match, the earliest registered
/// one wins. Register higher-priority chains first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionCatalog {
    chains: Vec<ActionChain>,
}

impl ActionCatalog {
    /// Validates and builds a catalog.
    pub fn new(chains: Vec<ActionChain>) -> Result<Self, CatalogError> {
        for (index, chain) in chains.iter().enumerate() {
            if chain.steps.is_empty() {
                return Err(CatalogError::EmptyChain {
                    index,
                    name: chain.name.clone(),
                });
            }
            if chain.start_flags.is_empty() {
                tracing::warn!(chain = %chain.name, "chain has no start flags and can never start");
            }
        }

        Ok(Self { chains })
    }

    /// Returns the chain at `index`.
    pub fn get(&self, index: usize) -> Option<&ActionChain> {
        self.chains.get(index)
    }

    pub fn chains(&self) -> &[ActionChain] {
        &self.chains
    }

    /// Indices of chains started by `command` from `mode`, in catalog order.
    pub fn openers(
        &self,
        command: ActionCommand,
        mode: LocomotionMode,
    ) -> impl Iterator<Item = usize> + '_ {
        self.chains
            .iter()
            .enumerate()
            .filter(move |(_, chain)| chain.starts_with(command, mode))
            .map(|(index, _)| index)
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ActionCommand::*;

    #[test]
    fn rejects_chain_without_steps() {
        let err = ActionCatalog::new(vec![
            ActionChain::new("Jab", LocomotionFlags::STILL, vec![ActionStep::new(FastAttack, 1)]),
            ActionChain::new("Broken", LocomotionFlags::STILL, vec![]),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            CatalogError::EmptyChain {
                index: 1,
                name: "Broken".into()
            }
        );
        assert_eq!(err.error_code(), "CATALOG_EMPTY_CHAIN");
        assert_eq!(err.to_string(), "chain #1 'Broken' has no steps");
    }

    #[test]
    fn renders_designer_code() {
        let chain = ActionChain::new(
            "Launcher",
            LocomotionFlags::all(),
            vec![
                ActionStep::new(FastAttack, 1),
                ActionStep::new(SlowAttack, 2).on_hit(),
                ActionStep::new(Jump, 3),
            ],
        );
        assert_eq!(chain.code(), "F,S,J");
        assert_eq!(chain.to_string(), "Launcher: F,S,J");
    }

    #[test]
    fn openers_preserve_catalog_order() {
        let catalog = ActionCatalog::new(vec![
            ActionChain::new("A", LocomotionFlags::WALKING, vec![ActionStep::new(Dodge, 1)]),
            ActionChain::new("B", LocomotionFlags::all(), vec![ActionStep::new(Dodge, 2)]),
            ActionChain::new("C", LocomotionFlags::STILL, vec![ActionStep::new(Dodge, 3)]),
        ])
        .unwrap();

        let still: Vec<_> = catalog.openers(Dodge, LocomotionMode::Still).collect();
        assert_eq!(still, vec![1, 2]);
        let walking: Vec<_> = catalog.openers(Dodge, LocomotionMode::Walking).collect();
        assert_eq!(walking, vec![0, 1]);
        assert_eq!(catalog.openers(Jump, LocomotionMode::Still).count(), 0);
    }
}
