use std::collections::HashMap;

use newsdesk_core::strings::CLASS_LOADING_INDICATOR;
use newsdesk_core::{Effect, IndicatorId, Msg, NodeId, SlotGeometry};
use page_logging::{page_debug, page_info, page_warn};

use super::document::{Document, DomError, DomQuery, PageSurface, Selector};
use super::hooks::{AD_PLACEHOLDER_CLASS, AD_SLOT_CLASS, VIEWED_ATTR};
use super::timers::TimerQueue;

/// Applies core effects to the host document and timer queue.
pub(crate) struct EffectRunner<'a, D: Document> {
    document: &'a mut D,
    timers: &'a mut TimerQueue,
    indicators: &'a mut HashMap<IndicatorId, NodeId>,
}

impl<'a, D: Document> EffectRunner<'a, D> {
    pub(crate) fn new(
        document: &'a mut D,
        timers: &'a mut TimerQueue,
        indicators: &'a mut HashMap<IndicatorId, NodeId>,
    ) -> Self {
        Self {
            document,
            timers,
            indicators,
        }
    }

    /// Runs `effects` in order; returns messages the host owes the core in reply.
    pub(crate) fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut replies = Vec::new();
        for effect in effects {
            match self.apply(effect) {
                Ok(Some(msg)) => replies.push(msg),
                Ok(None) => {}
                // A vanished element only disables the feature that touched it.
                Err(err) => page_warn!("Effect skipped: {}", err),
            }
        }
        replies
    }

    fn apply(&mut self, effect: Effect) -> Result<Option<Msg>, DomError> {
        match effect {
            Effect::AddClass { node, class } => self.document.set_class(node, class, true)?,
            Effect::RemoveClass { node, class } => self.document.set_class(node, class, false)?,
            Effect::SetClass {
                node,
                class,
                present,
            } => self.document.set_class(node, class, present)?,
            Effect::SetText { node, text } => self.document.set_text(node, &text)?,
            Effect::SetData { node, key, value } => self.document.set_data(node, key, &value)?,
            Effect::AppendIndicator {
                container,
                indicator,
                text,
            } => {
                let node =
                    self.document
                        .append_element(container, "div", CLASS_LOADING_INDICATOR, text)?;
                self.indicators.insert(indicator, node);
            }
            Effect::RemoveIndicator { indicator, .. } => {
                if let Some(node) = self.indicators.remove(&indicator) {
                    self.document.remove_element(node)?;
                }
            }
            Effect::ResetForm { form } => self.document.reset_form(form)?,
            Effect::Navigate { target } => self.document.navigate(&target),
            Effect::OpenWindow { url, features } => {
                page_debug!("open share window {}", url);
                self.document.open_window(&url, "_blank", &features);
            }
            Effect::Alert(message) => {
                page_debug!("alert: {}", message);
                self.document.alert(&message);
            }
            Effect::Log(event) => {
                let line = event.to_string();
                page_info!("{}", line);
                self.document.log_event(&line);
            }
            Effect::ScheduleTimer { timer, after_ms } => {
                let due_at = self.timers.schedule(timer, after_ms);
                page_debug!("scheduled {:?} due at {}ms", timer, due_at);
            }
            Effect::ListAdPlaceholders => {
                let placeholders = self
                    .document
                    .query_all(&Selector::Class(AD_PLACEHOLDER_CLASS));
                return Ok(Some(Msg::PlaceholdersListed { placeholders }));
            }
            Effect::MeasureAdSlots => return Ok(Some(measure_ad_slots(&*self.document))),
        }
        Ok(None)
    }
}

/// Snapshots every `.ad-slot` for a visibility scan.
pub(crate) fn measure_ad_slots<D: Document + ?Sized>(document: &D) -> Msg {
    let slots = document
        .query_all(&Selector::Class(AD_SLOT_CLASS))
        .into_iter()
        .map(|node| SlotGeometry {
            node,
            id: document.attribute(node, "id"),
            rect: document.bounding_rect(node),
            viewed: document
                .attribute(node, VIEWED_ATTR)
                .is_some_and(|v| !v.is_empty()),
        })
        .collect();
    Msg::SlotsMeasured {
        viewport: document.viewport(),
        slots,
    }
}
