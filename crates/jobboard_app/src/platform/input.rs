use jobboard_core::{EntryId, JobForm, Msg};

/// What one line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Dispatch(Vec<Msg>),
    Show,
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_line(line: &str) -> Input {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Input::Dispatch(vec![Msg::Tick]),
        "search" => {
            let (title, location) = rest.split_once('|').unwrap_or((rest, ""));
            Input::Dispatch(vec![
                Msg::SearchInputChanged {
                    title: title.trim().to_string(),
                    location: location.trim().to_string(),
                },
                Msg::SearchSubmitted,
            ])
        }
        "apply" => match rest.parse() {
            Ok(card_id) => Input::Dispatch(vec![Msg::ApplyClicked { card_id }]),
            Err(_) => Input::Invalid(format!("apply needs a card number, got {rest:?}")),
        },
        "cart" => Input::Dispatch(vec![Msg::CartOpened]),
        "close" => Input::Dispatch(vec![Msg::CartClosed]),
        "remove" => match rest.parse() {
            Ok(id) => Input::Dispatch(vec![Msg::RemoveClicked {
                entry_id: EntryId::new(id),
            }]),
            Err(_) => Input::Invalid(format!("remove needs an entry number, got {rest:?}")),
        },
        "pop" => Input::Dispatch(vec![Msg::RemoveLastPressed]),
        "new" => Input::Dispatch(vec![Msg::JobFormOpened]),
        "cancel" => Input::Dispatch(vec![Msg::JobFormCancelled]),
        "post" => Input::Dispatch(vec![
            Msg::JobFormOpened,
            Msg::JobFormSubmitted(parse_form(rest)),
        ]),
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => Input::Invalid(format!("unknown command {other:?}, try help")),
    }
}

/// Missing trailing fields stay empty so the form validation names them.
fn parse_form(rest: &str) -> JobForm {
    let mut fields = rest.splitn(4, '|').map(|field| field.trim().to_string());
    JobForm {
        title: fields.next().unwrap_or_default(),
        company: fields.next().unwrap_or_default(),
        location: fields.next().unwrap_or_default(),
        description: fields.next().unwrap_or_default(),
    }
}
