//! UI Components for the dashboard screens.
//!
//! Components are plain values: construct one with the data to show and
//! call `render`. None of them hold state between frames.
//! - High contrast (black/white only)
//! - Fixed geometry from [`layout`](crate::ui::theme::layout)

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle, Triangle},
    text::{Alignment, Text},
};
use embedded_text::{
    alignment::{HorizontalAlignment, VerticalAlignment},
    style::TextBoxStyleBuilder,
    TextBox,
};

use crate::model::Ratio;
use crate::ui::theme::layout::{
    CARD_RADIUS, CARD_SIZE, GAP_SM, HEADER_TEXT_Y, INNER_PAD, PROGRESS_H, PROGRESS_INSET,
    SEP_THICKNESS, TAB_BAR_H, TAB_ICON_SIZE, TAB_INDICATOR_H,
};
use crate::ui::theme::{ui_font_large_title, ui_font_small, ui_font_title};

/// Screen title centered at the top of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let center_x = display.bounding_box().size.width as i32 / 2;
        let style = MonoTextStyle::new(ui_font_large_title(), BinaryColor::On);
        Text::with_alignment(
            self.title,
            Point::new(center_x, HEADER_TEXT_Y),
            style,
            Alignment::Center,
        )
        .draw(display)?;
        Ok(())
    }
}

/// Bold centered section title at a fixed baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTitle<'a> {
    pub text: &'a str,
    pub baseline_y: i32,
}

impl<'a> SectionTitle<'a> {
    pub fn new(text: &'a str, baseline_y: i32) -> Self {
        Self { text, baseline_y }
    }

    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let center_x = display.bounding_box().size.width as i32 / 2;
        let style = MonoTextStyle::new(ui_font_title(), BinaryColor::On);
        Text::with_alignment(
            self.text,
            Point::new(center_x, self.baseline_y),
            style,
            Alignment::Center,
        )
        .draw(display)?;
        Ok(())
    }
}

/// Fixed-size square card showing a caption above a large value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewCard<'a> {
    pub title: &'a str,
    pub value: &'a str,
    pub top_left: Point,
}

impl<'a> OverviewCard<'a> {
    pub fn new(title: &'a str, value: &'a str, top_left: Point) -> Self {
        Self {
            title,
            value,
            top_left,
        }
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.top_left, Size::new(CARD_SIZE, CARD_SIZE))
    }

    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let bounds = self.bounds();

        RoundedRectangle::with_equal_corners(bounds, Size::new(CARD_RADIUS, CARD_RADIUS))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display)?;

        // Caption wraps inside the upper half of the card
        let caption_bounds = Rectangle::new(
            self.top_left + Point::new(INNER_PAD, INNER_PAD + GAP_SM),
            Size::new(CARD_SIZE - 2 * INNER_PAD as u32, CARD_SIZE / 2 - INNER_PAD as u32),
        );
        let caption_style = MonoTextStyle::new(ui_font_small(), BinaryColor::Off);
        let textbox_style = TextBoxStyleBuilder::new()
            .alignment(HorizontalAlignment::Center)
            .vertical_alignment(VerticalAlignment::Top)
            .build();
        TextBox::with_textbox_style(self.title, caption_bounds, caption_style, textbox_style)
            .draw(display)?;

        let value_style = MonoTextStyle::new(ui_font_large_title(), BinaryColor::Off);
        Text::with_alignment(
            self.value,
            Point::new(
                bounds.center().x,
                self.top_left.y + (CARD_SIZE as i32 * 3) / 4 + GAP_SM,
            ),
            value_style,
            Alignment::Center,
        )
        .draw(display)?;

        Ok(())
    }
}

/// Horizontal bar filled in proportion to a [`Ratio`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    pub top_left: Point,
    pub width: u32,
    pub value: Ratio,
}

impl ProgressBar {
    pub fn new(top_left: Point, width: u32, value: Ratio) -> Self {
        Self {
            top_left,
            width,
            value,
        }
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.top_left, Size::new(self.width, PROGRESS_H))
    }

    fn inner_width(&self) -> u32 {
        self.width.saturating_sub(2 * PROGRESS_INSET as u32)
    }

    /// Width in pixels of the filled part of the track.
    pub fn fill_width(&self) -> u32 {
        self.value.of(self.inner_width())
    }

    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let radius = Size::new(PROGRESS_H / 2, PROGRESS_H / 2);
        RoundedRectangle::with_equal_corners(self.bounds(), radius)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(display)?;

        let fill = self.fill_width();
        if fill > 0 {
            Rectangle::new(
                self.top_left + Point::new(PROGRESS_INSET, PROGRESS_INSET),
                Size::new(fill, PROGRESS_H - 2 * PROGRESS_INSET as u32),
            )
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display)?;
        }

        Ok(())
    }
}

/// Glyphs drawn from primitives for the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIcon {
    House,
    BarChart,
}

impl TabIcon {
    /// Draw inside a `TAB_ICON_SIZE` square at `top_left`. Filled when selected.
    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        self,
        display: &mut D,
        top_left: Point,
        filled: bool,
    ) -> Result<(), D::Error> {
        let style = if filled {
            PrimitiveStyle::with_fill(BinaryColor::On)
        } else {
            PrimitiveStyle::with_stroke(BinaryColor::On, 2)
        };
        let s = TAB_ICON_SIZE as i32;

        match self {
            TabIcon::House => {
                let eave = s * 2 / 5;
                Triangle::new(
                    top_left + Point::new(0, eave),
                    top_left + Point::new(s / 2, 0),
                    top_left + Point::new(s, eave),
                )
                .into_styled(style)
                .draw(display)?;
                Rectangle::new(
                    top_left + Point::new(4, eave),
                    Size::new((s - 8) as u32, (s - eave) as u32),
                )
                .into_styled(style)
                .draw(display)?;
            }
            TabIcon::BarChart => {
                let bar_w = s / 4;
                for (i, height) in [s / 2, s, s * 3 / 4].into_iter().enumerate() {
                    let x = i as i32 * (bar_w + bar_w / 2);
                    Rectangle::new(
                        top_left + Point::new(x, s - height),
                        Size::new(bar_w as u32, height as u32),
                    )
                    .into_styled(style)
                    .draw(display)?;
                }
            }
        }

        Ok(())
    }
}

/// One entry in the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabItem {
    pub label: &'static str,
    pub icon: TabIcon,
}

/// Bottom tab bar with equally wide items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBar<'a> {
    pub items: &'a [TabItem],
    pub selected: usize,
    pub top: i32,
    pub width: u32,
}

impl<'a> TabBar<'a> {
    pub fn new(items: &'a [TabItem], selected: usize, top: i32, width: u32) -> Self {
        Self {
            items,
            selected,
            top,
            width,
        }
    }

    fn item_width(&self) -> u32 {
        self.width / self.items.len().max(1) as u32
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::new(0, self.top), Size::new(self.width, TAB_BAR_H as u32))
    }

    pub fn item_bounds(&self, index: usize) -> Rectangle {
        let item_width = self.item_width();
        Rectangle::new(
            Point::new(index as i32 * item_width as i32, self.top),
            Size::new(item_width, TAB_BAR_H as u32),
        )
    }

    /// Index of the item under `point`, if any.
    pub fn item_at(&self, point: Point) -> Option<usize> {
        (0..self.items.len()).find(|&i| self.item_bounds(i).contains(point))
    }

    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.bounds()
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(display)?;

        // Separator line
        Rectangle::new(Point::new(0, self.top), Size::new(self.width, SEP_THICKNESS))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display)?;

        let label_style = MonoTextStyle::new(ui_font_small(), BinaryColor::On);
        for (i, item) in self.items.iter().enumerate() {
            let bounds = self.item_bounds(i);
            let center_x = bounds.center().x;
            let is_selected = i == self.selected;

            if is_selected {
                let indicator_w = bounds.size.width / 2;
                Rectangle::new(
                    Point::new(center_x - indicator_w as i32 / 2, self.top),
                    Size::new(indicator_w, TAB_INDICATOR_H),
                )
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(display)?;
            }

            let icon_top_left = Point::new(
                center_x - TAB_ICON_SIZE as i32 / 2,
                self.top + TAB_INDICATOR_H as i32 + 2 * GAP_SM,
            );
            item.icon.render(display, icon_top_left, is_selected)?;

            Text::with_alignment(
                item.label,
                Point::new(center_x, self.top + TAB_BAR_H - 2 * GAP_SM),
                label_style,
                Alignment::Center,
            )
            .draw(display)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_display::TestDisplay;

    const ITEMS: [TabItem; 2] = [
        TabItem {
            label: "Dashboard",
            icon: TabIcon::House,
        },
        TabItem {
            label: "Survey Results",
            icon: TabIcon::BarChart,
        },
    ];

    #[test]
    fn overview_card_is_fixed_size() {
        let card = OverviewCard::new("Average Work Hours", "40", Point::new(44, 64));
        assert_eq!(card.bounds().top_left, Point::new(44, 64));
        assert_eq!(card.bounds().size, Size::new(CARD_SIZE, CARD_SIZE));
    }

    #[test]
    fn overview_card_draws_inverted_text() {
        let card = OverviewCard::new("Completed Surveys", "150", Point::new(0, 0));
        let mut display = TestDisplay::new(CARD_SIZE, CARD_SIZE);
        card.render(&mut display).unwrap();

        let black = display.black_pixel_count();
        let total = (CARD_SIZE * CARD_SIZE) as usize;
        // Mostly filled, with white glyphs and rounded corners cut out
        assert!(black > total / 2);
        assert!(black < total);
    }

    #[test]
    fn progress_fill_tracks_ratio() {
        let empty = ProgressBar::new(Point::zero(), 104, Ratio::ZERO);
        let half = ProgressBar::new(Point::zero(), 104, Ratio::new(0.5));
        let full = ProgressBar::new(Point::zero(), 104, Ratio::ONE);

        assert_eq!(empty.fill_width(), 0);
        assert_eq!(half.fill_width(), 50);
        assert_eq!(full.fill_width(), 100);

        let mut a = TestDisplay::new(104, PROGRESS_H);
        let mut b = TestDisplay::new(104, PROGRESS_H);
        half.render(&mut a).unwrap();
        full.render(&mut b).unwrap();
        assert!(b.black_pixel_count() > a.black_pixel_count());
    }

    #[test]
    fn tab_bar_hit_testing() {
        let bar = TabBar::new(&ITEMS, 0, 720, 480);
        assert_eq!(bar.item_at(Point::new(10, 760)), Some(0));
        assert_eq!(bar.item_at(Point::new(239, 799)), Some(0));
        assert_eq!(bar.item_at(Point::new(240, 730)), Some(1));
        assert_eq!(bar.item_at(Point::new(300, 700)), None);
    }

    #[test]
    fn selected_tab_icon_is_filled() {
        let mut first = TestDisplay::new(480, 800);
        let mut second = TestDisplay::new(480, 800);
        TabBar::new(&ITEMS, 0, 720, 480).render(&mut first).unwrap();
        TabBar::new(&ITEMS, 1, 720, 480).render(&mut second).unwrap();

        let left_half = Rectangle::new(Point::new(0, 721), Size::new(240, 79));
        assert!(first.black_pixels_in(left_half) > second.black_pixels_in(left_half));
    }

    #[test]
    fn header_renders_text() {
        let mut display = TestDisplay::new(480, 60);
        Header::new("Dashboard").render(&mut display).unwrap();
        assert!(display.black_pixel_count() > 0);
    }
}
