//! Scripted editing sessions.
//!
//! A session script records the combinations a product was saved with and the
//! edits a user made afterwards. Dimensions and options are addressed by
//! position because their ids only exist inside a running session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combination::{Combination, CombinationKey};
use crate::dimensions::{is_blank, DimensionId, OptionId};
use crate::editor::VariantEditor;
use crate::error::{ConfigError, ScriptError};

/// How the editor is seeded with the `previous` combinations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStart {
    /// Show `previous` untouched until the first dimension edit.
    #[default]
    Fresh,
    /// Rebuild dimensions from `previous` and regenerate right away.
    Resume,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditStep {
    AddDimension,
    RenameDimension {
        dimension: usize,
        name: String,
    },
    EditOption {
        dimension: usize,
        option: usize,
        name: String,
    },
    DeleteOption {
        dimension: usize,
        option: usize,
    },
    DeleteDimension {
        dimension: usize,
    },
    SetPrice {
        values: Vec<String>,
        price: f64,
    },
    SetIncluded {
        values: Vec<String>,
        included: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionScript {
    #[serde(default)]
    pub start: SessionStart,
    #[serde(default)]
    pub previous: Vec<Combination>,
    #[serde(default)]
    pub edits: Vec<EditStep>,
}

impl SessionScript {
    #[must_use]
    pub fn start_editor(&self) -> VariantEditor {
        match self.start {
            SessionStart::Fresh => VariantEditor::new(self.previous.clone()),
            SessionStart::Resume => VariantEditor::resume(self.previous.clone()),
        }
    }
}

/// A step that ran but was refused by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub step: usize,
    pub message: String,
}

#[derive(Debug)]
pub struct ReplayOutcome {
    pub editor: VariantEditor,
    pub notices: Vec<Notice>,
}

/// Load and validate a session script from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_session_script(path: &Path) -> Result<SessionScript, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ScriptFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_session_script(&content)
}

/// Parse and validate a session script from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text cannot be parsed or fails validation.
pub fn parse_session_script(content: &str) -> Result<SessionScript, ConfigError> {
    let script: SessionScript = serde_yaml::from_str(content)?;
    validate_script(&script)?;
    Ok(script)
}

fn validate_script(script: &SessionScript) -> Result<(), ConfigError> {
    for (index, combination) in script.previous.iter().enumerate() {
        if combination.options.is_empty() {
            return Err(ConfigError::Validation(format!(
                "previous combination {index} has no options"
            )));
        }

        if combination
            .options
            .iter()
            .any(|pair| is_blank(&pair.key) || is_blank(&pair.value))
        {
            return Err(ConfigError::Validation(format!(
                "previous combination {index} (\"{}\") has a blank key or value",
                combination.label()
            )));
        }

        if !combination.price.is_finite() {
            return Err(ConfigError::Validation(format!(
                "previous combination {index} has a non-finite price"
            )));
        }
    }

    for (step, edit) in script.edits.iter().enumerate() {
        if let EditStep::SetPrice { price, .. } = edit {
            if !price.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "edit {step} sets a non-finite price"
                )));
            }
        }
    }

    Ok(())
}

/// Applies every edit of `script` to a fresh editor.
///
/// A blocked `add_dimension` is recorded as a [`Notice`] and replay continues.
///
/// # Errors
///
/// Returns [`ScriptError`] when an edit addresses a dimension, option, or
/// combination that does not exist at that point of the session.
pub fn replay(script: &SessionScript) -> Result<ReplayOutcome, ScriptError> {
    let mut editor = script.start_editor();
    let mut notices = Vec::new();

    for (step, edit) in script.edits.iter().enumerate() {
        tracing::debug!(step, ?edit, "applying edit");
        if let Some(message) = apply(&mut editor, step, edit)? {
            notices.push(Notice { step, message });
        }
    }

    Ok(ReplayOutcome { editor, notices })
}

fn apply(
    editor: &mut VariantEditor,
    step: usize,
    edit: &EditStep,
) -> Result<Option<String>, ScriptError> {
    match edit {
        EditStep::AddDimension => {
            if let Err(e) = editor.add_dimension() {
                return Ok(Some(e.to_string()));
            }
        }
        EditStep::RenameDimension { dimension, name } => {
            let id = dimension_at(editor, step, *dimension)?;
            editor.rename_dimension(id, name.clone());
        }
        EditStep::EditOption {
            dimension,
            option,
            name,
        } => {
            let (id, option_id) = option_at(editor, step, *dimension, *option)?;
            editor.edit_option(id, option_id, name.clone());
        }
        EditStep::DeleteOption { dimension, option } => {
            let (id, option_id) = option_at(editor, step, *dimension, *option)?;
            if !editor.delete_option(id, option_id) {
                return Ok(Some(format!(
                    "option {option} of dimension {dimension} is the entry slot and cannot be deleted"
                )));
            }
        }
        EditStep::DeleteDimension { dimension } => {
            let id = dimension_at(editor, step, *dimension)?;
            editor.delete_dimension(id);
        }
        EditStep::SetPrice { values, price } => {
            let key = CombinationKey::new(values.iter().cloned());
            if !editor.set_price(&key, *price) {
                return Err(ScriptError::UnknownCombination {
                    step,
                    label: key.label(),
                });
            }
        }
        EditStep::SetIncluded { values, included } => {
            let key = CombinationKey::new(values.iter().cloned());
            if !editor.set_included(&key, *included) {
                return Err(ScriptError::UnknownCombination {
                    step,
                    label: key.label(),
                });
            }
        }
    }

    Ok(None)
}

fn dimension_at(
    editor: &VariantEditor,
    step: usize,
    index: usize,
) -> Result<DimensionId, ScriptError> {
    editor
        .dimensions()
        .get(index)
        .map(|dimension| dimension.id)
        .ok_or(ScriptError::UnknownDimension { step, index })
}

fn option_at(
    editor: &VariantEditor,
    step: usize,
    dimension: usize,
    index: usize,
) -> Result<(DimensionId, OptionId), ScriptError> {
    let found = editor
        .dimensions()
        .get(dimension)
        .ok_or(ScriptError::UnknownDimension {
            step,
            index: dimension,
        })?;
    let option = found.options.get(index).ok_or(ScriptError::UnknownOption {
        step,
        dimension,
        index,
    })?;
    Ok((found.id, option.id))
}
