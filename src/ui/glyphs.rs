#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub arrow_left: &'static str,
    pub arrow_right: &'static str,
    pub dot_active: &'static str,
    pub dot_inactive: &'static str,
    pub counter_separator: &'static str,
}

pub fn select(fancy_requested: bool) -> Glyphs {
    if fancy_requested {
        fancy()
    } else {
        ascii()
    }
}

fn ascii() -> Glyphs {
    Glyphs {
        arrow_left: "<",
        arrow_right: ">",
        dot_active: "*",
        dot_inactive: ".",
        counter_separator: "/",
    }
}

fn fancy() -> Glyphs {
    Glyphs {
        arrow_left: "◀",
        arrow_right: "▶",
        dot_active: "●",
        dot_inactive: "○",
        counter_separator: "/",
    }
}
