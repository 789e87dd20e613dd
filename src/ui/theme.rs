use std::fmt::Display;

use crossterm::style::{StyledContent, Stylize};

/// Section headings and status notes.
pub fn info<D: Display + Stylize<Styled = StyledContent<D>>>(text: D) -> StyledContent<D> {
    text.blue()
}

/// The word being drilled, and warnings.
pub fn highlight<D: Display + Stylize<Styled = StyledContent<D>>>(text: D) -> StyledContent<D> {
    text.red().bold()
}

pub fn definition<D: Display + Stylize<Styled = StyledContent<D>>>(text: D) -> StyledContent<D> {
    text.green()
}

pub fn dim<D: Display + Stylize<Styled = StyledContent<D>>>(text: D) -> StyledContent<D> {
    text.dark_grey()
}
