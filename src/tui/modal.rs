// Modal state
//
// A modal captures all keyboard input while open. Login and the filter
// prompt carry their own form state here; rendering lives in views/modal.rs.

/// Which modal is currently open
pub enum Modal {
    /// Keybinding reference
    Help,
    /// Recent log entries
    Logs,
    /// Cosmetic client-only login form
    Login(LoginForm),
    /// Criteria picker + value input for server-side filters
    Filter(FilterPrompt),
}

// ─────────────────────────────────────────────────────────────────────────────
// Login form
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Client-only login form; nothing is sent anywhere
#[derive(Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: Option<LoginField>,
    pub error: Option<&'static str>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            focus: Some(LoginField::Email),
            ..Self::default()
        }
    }

    /// Move focus between the two fields
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Some(LoginField::Email) => Some(LoginField::Password),
            _ => Some(LoginField::Email),
        };
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            Some(LoginField::Email) => self.email.push(c),
            Some(LoginField::Password) => self.password.push(c),
            None => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            Some(LoginField::Email) => {
                self.email.pop();
            }
            Some(LoginField::Password) => {
                self.password.pop();
            }
            None => {}
        }
    }

    /// Validate the form. Any address with an '@' and a password of six or
    /// more characters passes; there is no backend to check against.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err("Please fill in all fields");
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email");
        }
        if self.password.len() < 6 {
            return Err("Password must be at least 6 characters");
        }
        Ok(())
    }

    /// Validate and record the error on failure. Returns true on success.
    pub fn submit(&mut self) -> bool {
        match self.validate() {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(message) => {
                self.error = Some(message);
                false
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter prompt
// ─────────────────────────────────────────────────────────────────────────────

/// Server-side filter criteria selectable from the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCriterion {
    Independent,
    Name,
    FullName,
    Code,
    Codes,
    Currency,
    Language,
    Capital,
    CallingCode,
    Region,
    RegionalBloc,
    Subregion,
    Translation,
}

impl FilterCriterion {
    pub fn all() -> &'static [FilterCriterion] {
        &[
            FilterCriterion::Independent,
            FilterCriterion::Name,
            FilterCriterion::FullName,
            FilterCriterion::Code,
            FilterCriterion::Codes,
            FilterCriterion::Currency,
            FilterCriterion::Language,
            FilterCriterion::Capital,
            FilterCriterion::CallingCode,
            FilterCriterion::Region,
            FilterCriterion::RegionalBloc,
            FilterCriterion::Subregion,
            FilterCriterion::Translation,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterCriterion::Independent => "Independent",
            FilterCriterion::Name => "Name",
            FilterCriterion::FullName => "Exact name",
            FilterCriterion::Code => "Country code",
            FilterCriterion::Codes => "Country codes",
            FilterCriterion::Currency => "Currency",
            FilterCriterion::Language => "Language",
            FilterCriterion::Capital => "Capital",
            FilterCriterion::CallingCode => "Calling code",
            FilterCriterion::Region => "Region",
            FilterCriterion::RegionalBloc => "Regional bloc",
            FilterCriterion::Subregion => "Subregion",
            FilterCriterion::Translation => "Translation",
        }
    }

    /// Placeholder shown in the value input
    pub fn hint(&self) -> &'static str {
        match self {
            FilterCriterion::Independent => "true or false",
            FilterCriterion::Name => "e.g. guinea",
            FilterCriterion::FullName => "e.g. Iceland",
            FilterCriterion::Code => "cca2/cca3, e.g. ISL",
            FilterCriterion::Codes => "codes separated by ; e.g. ISL;NOR",
            FilterCriterion::Currency => "e.g. EUR",
            FilterCriterion::Language => "e.g. fin",
            FilterCriterion::Capital => "e.g. Helsinki",
            FilterCriterion::CallingCode => "e.g. 358",
            FilterCriterion::Region => "e.g. Europe",
            FilterCriterion::RegionalBloc => "e.g. EU",
            FilterCriterion::Subregion => "e.g. Northern Europe",
            FilterCriterion::Translation => "e.g. Suomi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStage {
    /// Picking a criterion from the list
    Choose,
    /// Typing the value
    Input,
}

/// Two-stage prompt: pick a criterion, then type its value
pub struct FilterPrompt {
    pub selected: usize,
    pub value: String,
    pub stage: PromptStage,
}

impl FilterPrompt {
    pub fn new() -> Self {
        Self {
            selected: 0,
            value: String::new(),
            stage: PromptStage::Choose,
        }
    }

    pub fn criterion(&self) -> FilterCriterion {
        FilterCriterion::all()[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % FilterCriterion::all().len();
    }

    pub fn select_prev(&mut self) {
        let len = FilterCriterion::all().len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Advance from criterion choice to value input
    pub fn confirm_choice(&mut self) {
        self.stage = PromptStage::Input;
    }

    /// Step back from value input to the criterion list
    pub fn back_to_choice(&mut self) {
        self.stage = PromptStage::Choose;
        self.value.clear();
    }
}

impl Default for FilterPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rejects_empty_fields() {
        let mut form = LoginForm::new();
        assert!(!form.submit());
        assert_eq!(form.error, Some("Please fill in all fields"));
    }

    #[test]
    fn login_rejects_email_without_at() {
        let mut form = LoginForm::new();
        form.email = "not-an-email".to_string();
        form.password = "secret123".to_string();
        assert!(!form.submit());
        assert_eq!(form.error, Some("Please enter a valid email"));
    }

    #[test]
    fn login_rejects_short_password() {
        let mut form = LoginForm::new();
        form.email = "user@example.com".to_string();
        form.password = "short".to_string();
        assert!(!form.submit());
        assert_eq!(form.error, Some("Password must be at least 6 characters"));
    }

    #[test]
    fn login_accepts_any_valid_combination() {
        let mut form = LoginForm::new();
        form.email = "user@example.com".to_string();
        form.password = "secret123".to_string();
        assert!(form.submit());
        assert!(form.error.is_none());
    }

    #[test]
    fn prompt_selection_wraps() {
        let mut prompt = FilterPrompt::new();
        prompt.select_prev();
        assert_eq!(prompt.criterion(), FilterCriterion::Translation);
        prompt.select_next();
        assert_eq!(prompt.criterion(), FilterCriterion::Independent);
    }

    #[test]
    fn prompt_back_clears_value() {
        let mut prompt = FilterPrompt::new();
        prompt.confirm_choice();
        prompt.value.push_str("Europe");
        prompt.back_to_choice();
        assert_eq!(prompt.stage, PromptStage::Choose);
        assert!(prompt.value.is_empty());
    }
}
