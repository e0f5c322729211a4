use std::sync::mpsc::Receiver;

use crate::ui::core::error::LayoutError;
use crate::ui::core::geom::{CellRect, Vec2};
use crate::ui::core::painter::RenderLayer;
use crate::ui::core::reveal::TextReveal;
use crate::ui::core::scene::View;

/// Inset between the panel border and its messages.
pub const MARGIN: Vec2 = Vec2::new(2, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Refusal {
    Empty,
    Full,
}

/// A framed panel of revealed text messages (the log / inventory panels).
///
/// Messages are placed top to bottom with one blank row between them.
/// Once the panel is full, further messages are refused.
#[derive(Debug)]
pub struct MessageList {
    view: View,
    body: CellRect,
    messages: Vec<TextReveal>,
    next_row: i32,
}

impl MessageList {
    /// `view` must already be aligned.
    pub fn new(view: View) -> Result<Self, LayoutError> {
        let rect = view.rect().ok_or_else(|| LayoutError::UnresolvedParent {
            title: view.title().to_string(),
        })?;
        let body = rect.with_padding(MARGIN)?;
        Ok(Self {
            view,
            body,
            messages: Vec::new(),
            next_row: 0,
        })
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn body(&self) -> CellRect {
        self.body
    }

    pub fn messages(&self) -> &[TextReveal] {
        &self.messages
    }

    /// Queues `message` below the previous one. Returns `false` when the
    /// message is empty or there is no row left for it.
    pub fn push(&mut self, message: &str) -> bool {
        match self.place(message) {
            Ok(()) => true,
            Err(Refusal::Empty) => {
                tracing::debug!(panel = self.view.title(), "empty message ignored");
                false
            }
            Err(Refusal::Full) => {
                tracing::debug!(panel = self.view.title(), "panel full, message dropped");
                false
            }
        }
    }

    /// Pushes the lines already queued on `rx` and returns how many were
    /// accepted. Lines sent while this runs wait for the next call.
    ///
    /// Refusals are not logged here: `rx` may be fed by this crate's own
    /// log output.
    pub fn push_pending(&mut self, rx: &Receiver<String>) -> usize {
        let lines: Vec<String> = rx.try_iter().collect();
        lines
            .iter()
            .filter(|line| self.place(line.as_str()).is_ok())
            .count()
    }

    fn place(&mut self, message: &str) -> Result<(), Refusal> {
        if message.is_empty() {
            return Err(Refusal::Empty);
        }
        let top = self.body.pos.y + self.next_row;
        let slot = CellRect::new(
            Vec2::new(self.body.pos.x, top),
            Vec2::new(self.body.size.x, self.body.bottom() - top),
        );
        let reveal = TextReveal::new(slot, message);
        if reveal.rows() == 0 {
            return Err(Refusal::Full);
        }
        self.next_row += reveal.rows() as i32 + 1;
        self.messages.push(reveal);
        Ok(())
    }

    /// Advances the oldest unfinished message by `n` graphemes.
    pub fn step(&mut self, n: usize) {
        if let Some(reveal) = self.messages.iter_mut().find(|m| !m.is_done()) {
            reveal.step(n);
        }
    }

    pub fn is_settled(&self) -> bool {
        self.messages.iter().all(TextReveal::is_done)
    }

    pub fn draw(&self, layer: &mut RenderLayer) {
        layer.draw_view(&self.view);
        for message in &self.messages {
            message.draw(layer);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/message_list.rs"]
mod tests;
