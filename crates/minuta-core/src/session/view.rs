use crate::error::{MinutaError, Result};
use serde::Serialize;
use std::fmt;

/// Screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Upload,
    Form,
    Editor,
}

/// Everything a session can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LoadTemplate,
    EditValues,
    Generate,
    Edit,
    Export,
    BackToForm,
    StartOver,
}

impl View {
    /// The view after `action`, or an error if `action` is not allowed here
    ///
    /// ```text
    /// Upload --LoadTemplate--> Form
    /// Form   --EditValues----> Form
    /// Form   --Generate------> Editor
    /// Editor --Edit/Export---> Editor
    /// Editor --BackToForm----> Form
    /// any    --StartOver-----> Upload
    /// ```
    pub fn transition(self, action: Action) -> Result<View> {
        use Action::*;
        use View::*;

        match (self, action) {
            (_, StartOver) => Ok(Upload),
            (Upload, LoadTemplate) => Ok(Form),
            (Form, EditValues) => Ok(Form),
            (Form, Generate) => Ok(Editor),
            (Editor, Edit) | (Editor, Export) => Ok(Editor),
            (Editor, BackToForm) => Ok(Form),
            (from, action) => Err(MinutaError::InvalidTransition { from, action }),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Upload => "upload",
            View::Form => "form",
            View::Editor => "editor",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::LoadTemplate => "load a template",
            Action::EditValues => "edit values",
            Action::Generate => "generate the document",
            Action::Edit => "edit the document",
            Action::Export => "export the document",
            Action::BackToForm => "go back to the form",
            Action::StartOver => "start over",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let view = View::Upload.transition(Action::LoadTemplate).unwrap();
        assert_eq!(view, View::Form);
        let view = view.transition(Action::Generate).unwrap();
        assert_eq!(view, View::Editor);
        let view = view.transition(Action::BackToForm).unwrap();
        assert_eq!(view, View::Form);
    }

    #[test]
    fn test_start_over_from_anywhere() {
        for view in [View::Upload, View::Form, View::Editor] {
            assert_eq!(view.transition(Action::StartOver).unwrap(), View::Upload);
        }
    }

    #[test]
    fn test_rejected_transitions() {
        let cases = [
            (View::Upload, Action::Generate),
            (View::Upload, Action::EditValues),
            (View::Form, Action::LoadTemplate),
            (View::Form, Action::Export),
            (View::Editor, Action::EditValues),
            (View::Editor, Action::Generate),
            (View::Upload, Action::BackToForm),
        ];
        for (view, action) in cases {
            let err = view.transition(action).unwrap_err();
            assert!(
                matches!(err, MinutaError::InvalidTransition { from, action: a } if from == view && a == action)
            );
        }
    }

    #[test]
    fn test_error_message_names_view_and_action() {
        let err = View::Upload.transition(Action::Export).unwrap_err();
        assert_eq!(
            err.to_string(),
            "INVALID_TRANSITION: cannot export the document from the upload view"
        );
    }
}
