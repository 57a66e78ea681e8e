//! Form panel component for the record being created or edited.

use crate::api::MortgageId;
use crate::portfolio::{FormField, MortgageDraft};
use crate::tui::state::FormInputs;

/// Number of lines the form panel occupies.
pub(crate) const FORM_PANEL_HEIGHT: usize = FormField::ALL.len() + 1;

/// Context for rendering the form panel.
#[derive(Debug, Clone, Copy)]
pub struct FormPanelViewContext<'a> {
    /// The draft holding enumerated values.
    pub draft: &'a MortgageDraft,
    /// Raw text of the numeric inputs and the focused field.
    pub inputs: &'a FormInputs,
    /// Record being edited, if any.
    pub editing: Option<MortgageId>,
    /// Whether the form has keyboard focus.
    pub has_focus: bool,
}

/// Component for displaying the mortgage form.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormPanelComponent;

impl FormPanelComponent {
    /// Renders the title line followed by one line per field.
    #[must_use]
    pub fn view(ctx: &FormPanelViewContext<'_>) -> String {
        let mut output = ctx.editing.map_or_else(
            || "New mortgage\n".to_owned(),
            |id| format!("Editing mortgage #{id}\n"),
        );

        for field in FormField::ALL {
            let focused = ctx.has_focus && ctx.inputs.focused() == field;
            output.push_str(&Self::field_line(ctx, field, focused));
            output.push('\n');
        }

        output
    }

    fn field_line(ctx: &FormPanelViewContext<'_>, field: FormField, focused: bool) -> String {
        let marker = if focused { '>' } else { ' ' };
        let label = format!("{}:", field.label());
        let value = match field {
            FormField::LoanType => format!("< {} >", ctx.draft.loan_type.label()),
            FormField::PropertyType => format!("< {} >", ctx.draft.property_type.label()),
            _ if focused => format!("{}_", ctx.inputs.text(field)),
            _ => ctx.inputs.text(field).to_owned(),
        };
        format!("{marker} {label:<16} {value}")
    }
}
