use crate::consts;
use ratatui::layout::{Flex, Layout, Rect};

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 64, 25), Rect::new(0, 0, 64, 25))]
    #[case(Rect::new(0, 0, 80, 25), Rect::new(8, 0, 64, 25))]
    #[case(Rect::new(0, 0, 80, 27), Rect::new(8, 1, 64, 25))]
    fn test_get_display_area(#[case] area: Rect, #[case] r: Rect) {
        assert_eq!(get_display_area(area), r);
    }
}
