use std::io::{self, Write};

use board_logging::board_info;
use jobboard_core::{Effect, Notice};

/// Surfaces effects to the user as non-blocking notice lines.
pub fn run_effects(effects: Vec<Effect>, out: &mut impl Write) -> io::Result<()> {
    for effect in effects {
        match effect {
            Effect::Notify(notice) => {
                board_info!("Notice: {:?}", notice);
                writeln!(out, "! {}", notice_text(&notice))?;
            }
        }
    }
    Ok(())
}

pub fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::AddedToCart { title } => format!("{title} added to cart!"),
        Notice::AlreadyInCart { title, company } => {
            format!("{title} at {company} is already in your cart!")
        }
        Notice::Removed { title } => format!("Removed {title} from your cart."),
        Notice::CartEmpty => "Your cart is empty!".to_string(),
        Notice::JobPosted { title } => format!("Posted {title}."),
        Notice::FormIncomplete { field } => format!("Please fill in the {field} field."),
    }
}
