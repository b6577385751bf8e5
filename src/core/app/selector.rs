use crate::core::mode::AssistantMode;
use crate::core::session::{step_temperature, SessionSettings};
use crate::ui::picker::{PickerItem, PickerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorField {
    Mode,
    Model,
    Temperature,
}

impl SelectorField {
    pub fn next(self) -> Self {
        match self {
            SelectorField::Mode => SelectorField::Model,
            SelectorField::Model => SelectorField::Temperature,
            SelectorField::Temperature => SelectorField::Mode,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SelectorField::Mode => SelectorField::Temperature,
            SelectorField::Model => SelectorField::Mode,
            SelectorField::Temperature => SelectorField::Model,
        }
    }
}

/// Uncommitted choices on the selector screen. Nothing here reaches the
/// session until Start.
#[derive(Debug, Clone)]
pub struct SelectorForm {
    pub focus: SelectorField,
    pub modes: PickerState,
    pub models: PickerState,
    pub temperature: f64,
}

impl SelectorForm {
    pub fn new(preselected: Option<AssistantMode>, models: &[String], settings: &SessionSettings) -> Self {
        let mode_items = AssistantMode::ALL
            .iter()
            .map(|mode| PickerItem::new(mode.slug(), mode.label()))
            .collect();
        let model_items = models
            .iter()
            .map(|model| PickerItem::new(model.as_str(), model.as_str()))
            .collect();

        let mut form = Self {
            focus: SelectorField::Mode,
            modes: PickerState::new("Assistant mode", mode_items, 0),
            models: PickerState::new("Model", model_items, 0),
            temperature: settings.temperature,
        };
        form.load(preselected, settings);
        form
    }

    /// Re-seed the form from committed session settings.
    pub fn load(&mut self, preselected: Option<AssistantMode>, settings: &SessionSettings) {
        let mode = settings.mode.or(preselected).unwrap_or(AssistantMode::ALL[0]);
        self.modes.select_id(mode.slug());
        self.models.select_id(&settings.model);
        self.temperature = settings.temperature;
        self.focus = SelectorField::Mode;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn move_up(&mut self) {
        match self.focus {
            SelectorField::Mode => self.modes.move_up(),
            SelectorField::Model => self.models.move_up(),
            SelectorField::Temperature => self.adjust_temperature(1),
        }
    }

    pub fn move_down(&mut self) {
        match self.focus {
            SelectorField::Mode => self.modes.move_down(),
            SelectorField::Model => self.models.move_down(),
            SelectorField::Temperature => self.adjust_temperature(-1),
        }
    }

    pub fn adjust_temperature(&mut self, steps: i32) {
        self.temperature = step_temperature(self.temperature, steps);
    }

    pub fn selected_mode(&self) -> AssistantMode {
        self.modes
            .selected_id()
            .and_then(|slug| slug.parse().ok())
            .unwrap_or(AssistantMode::ALL[0])
    }

    pub fn selected_model(&self) -> Option<&str> {
        self.models.selected_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn models() -> Vec<String> {
        vec!["gpt-4o".into(), "gpt-4o-mini".into()]
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut form = SelectorForm::new(None, &models(), &SessionSettings::default());
        assert_eq!(form.focus, SelectorField::Mode);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus, SelectorField::Temperature);
        form.focus_next();
        assert_eq!(form.focus, SelectorField::Mode);
        form.focus_prev();
        assert_eq!(form.focus, SelectorField::Temperature);
    }

    #[test]
    fn preselection_prefers_session_mode() {
        let settings = SessionSettings::new(Some(AssistantMode::Clarification), "gpt-4o-mini", 0.3);
        let form = SelectorForm::new(Some(AssistantMode::Jigsaw), &models(), &settings);
        assert_eq!(form.selected_mode(), AssistantMode::Clarification);
        assert_eq!(form.selected_model(), Some("gpt-4o-mini"));
        assert_eq!(form.temperature, 0.3);

        let fresh = SessionSettings::new(None, "gpt-4o", 0.7);
        let form = SelectorForm::new(Some(AssistantMode::Jigsaw), &models(), &fresh);
        assert_eq!(form.selected_mode(), AssistantMode::Jigsaw);

        let form = SelectorForm::new(None, &models(), &fresh);
        assert_eq!(form.selected_mode(), AssistantMode::WriteUp);
    }

    #[test]
    fn arrows_act_on_focused_field() {
        let mut form = SelectorForm::new(None, &models(), &SessionSettings::new(None, "gpt-4o", 0.7));
        form.move_up();
        assert_eq!(form.selected_mode(), AssistantMode::Clarification);

        form.focus_next();
        form.move_down();
        assert_eq!(form.selected_model(), Some("gpt-4o-mini"));

        form.focus_next();
        form.move_up();
        assert_eq!(form.temperature, 0.75);
        form.adjust_temperature(10);
        assert_eq!(form.temperature, 1.0);
    }
}
