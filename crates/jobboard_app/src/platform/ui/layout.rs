/// Lines printed once at startup, before the first render.
pub fn banner() -> Vec<String> {
    let mut lines = vec!["Job Board".to_string(), "=========".to_string()];
    lines.extend(help());
    lines
}

pub fn help() -> Vec<String> {
    [
        "Commands:",
        "  search <title> [| <location>]   filter the job cards (empty clears)",
        "  apply <card>                    add a job card to your cart",
        "  cart / close                    open or close the cart",
        "  remove <entry>                  remove an entry while the cart is open",
        "  pop                             remove the most recently added entry",
        "  new                             open the add-job form",
        "  post <title> | <company> | <location> | <description>",
        "  cancel                          close the add-job form",
        "  show / help / quit",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
