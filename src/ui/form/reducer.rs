//! Reducer for the item editor form.

use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{coerce_price, FormError, FormField, FormFields, FormMode, FormState};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::OpenBlank => FormState::Open {
                mode: FormMode::Add,
                fields: FormFields::default(),
                focused: FormField::Name,
                error: None,
            },

            FormIntent::OpenWith { item } => FormState::Open {
                mode: FormMode::Edit,
                fields: FormFields::from_item(&item),
                focused: FormField::Name,
                error: None,
            },

            FormIntent::Input { ch } => match state {
                FormState::Open {
                    mode,
                    mut fields,
                    focused,
                    error,
                } => {
                    if !accepts(focused, fields.text(focused), ch) {
                        return FormState::Open {
                            mode,
                            fields,
                            focused,
                            error,
                        };
                    }
                    fields.text_mut(focused).push(ch);
                    if focused == FormField::Price {
                        fields.price = coerce_price(&fields.price_text);
                    }
                    FormState::Open {
                        mode,
                        fields,
                        focused,
                        error: None,
                    }
                }
                other => other,
            },

            FormIntent::Backspace => match state {
                FormState::Open {
                    mode,
                    mut fields,
                    focused,
                    ..
                } => {
                    fields.text_mut(focused).pop();
                    if focused == FormField::Price {
                        fields.price = coerce_price(&fields.price_text);
                    }
                    FormState::Open {
                        mode,
                        fields,
                        focused,
                        error: None,
                    }
                }
                other => other,
            },

            FormIntent::NextField => refocus(state, FormField::next),

            FormIntent::PrevField => refocus(state, FormField::prev),

            FormIntent::Reject { error } => match state {
                FormState::Open { mode, fields, .. } => {
                    let FormError::MissingField(focused) = error;
                    FormState::Open {
                        mode,
                        fields,
                        focused,
                        error: Some(error),
                    }
                }
                other => other,
            },

            FormIntent::Close => FormState::Hidden,
        }
    }
}

fn refocus(state: FormState, step: fn(FormField) -> FormField) -> FormState {
    match state {
        FormState::Open {
            mode,
            fields,
            focused,
            error,
        } => FormState::Open {
            mode,
            fields,
            focused: step(focused),
            error,
        },
        other => other,
    }
}

/// Control characters never enter a field. Price only takes digits and a
/// single decimal point, and stops growing once the value would overflow.
fn accepts(field: FormField, current: &str, ch: char) -> bool {
    if ch.is_control() {
        return false;
    }
    match field {
        FormField::Price => {
            let allowed = ch.is_ascii_digit() || (ch == '.' && !current.contains('.'));
            allowed && stays_finite(current, ch)
        }
        _ => true,
    }
}

fn stays_finite(current: &str, ch: char) -> bool {
    let mut next = String::with_capacity(current.len() + 1);
    next.push_str(current);
    next.push(ch);
    next.parse::<f64>().map_or(true, f64::is_finite)
}
