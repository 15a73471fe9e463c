use super::entrance::{Entrance, EntranceSpec};
use super::reveal::{RevealGroup, RevealProfile, RevealState, Toggle};
use super::scrub::{ScrubSpec, ScrubTrack};
use super::style::{apply_ranges, VisualStyle};
use super::trigger::{TriggerBounds, Viewport};
use super::TargetId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScrubId(usize);

#[derive(Clone, Debug, Default)]
struct TargetSlot {
    style: VisualStyle,
    dirty: bool,
    retired: bool,
}

/// Every binding of one mounted page, independent of the DOM.
///
/// The scene only computes styles. Whoever owns it measures triggers,
/// feeds scroll offsets and frame times in, and writes out whatever
/// [`MotionScene::drain_dirty`] returns.
#[derive(Clone, Debug)]
pub struct MotionScene {
    viewport: Viewport,
    scroll_y: f64,
    targets: Vec<TargetSlot>,
    reveals: Vec<RevealGroup>,
    scrubs: Vec<ScrubTrack>,
    entrances: Vec<Entrance>,
}

impl MotionScene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scroll_y: 0.0,
            targets: Vec::new(),
            reveals: Vec::new(),
            scrubs: Vec::new(),
            entrances: Vec::new(),
        }
    }

    pub fn add_target(&mut self) -> TargetId {
        self.targets.push(TargetSlot::default());
        TargetId::from_index(self.targets.len() - 1)
    }

    /// Registers a group and puts its members in the hidden state.
    pub fn add_reveal(
        &mut self,
        bounds: TriggerBounds,
        members: Vec<TargetId>,
        profile: RevealProfile,
    ) -> RevealId {
        for &member in &members {
            if let Some(slot) = self.slot_mut(member) {
                apply_ranges(&mut slot.style, &profile.ranges, 0.0);
                slot.dirty = true;
            }
        }
        self.reveals.push(RevealGroup::new(profile, bounds, members));
        RevealId(self.reveals.len() - 1)
    }

    pub fn add_scrub(&mut self, target: TargetId, bounds: TriggerBounds, spec: ScrubSpec) -> ScrubId {
        let track = ScrubTrack::new(target, spec, bounds);
        if let Some(slot) = self.slot_mut(target) {
            track.apply(&mut slot.style);
            slot.dirty = true;
        }
        self.scrubs.push(track);
        ScrubId(self.scrubs.len() - 1)
    }

    pub fn add_entrance(&mut self, target: TargetId, spec: &EntranceSpec, index: usize) {
        let entrance = Entrance::new(target, spec, index);
        if let Some(slot) = self.slot_mut(target) {
            entrance.apply(&mut slot.style);
            slot.dirty = true;
        }
        self.entrances.push(entrance);
    }

    pub fn set_reveal_bounds(&mut self, id: RevealId, bounds: TriggerBounds) {
        if let Some(group) = self.reveals.get_mut(id.0) {
            group.set_bounds(bounds);
        }
    }

    pub fn set_scrub_bounds(&mut self, id: ScrubId, bounds: TriggerBounds) {
        if let Some(track) = self.scrubs.get_mut(id.0) {
            track.set_bounds(bounds);
        }
    }

    /// New viewport size. Call [`MotionScene::refresh`] once the triggers
    /// have been re-measured.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn scroll_to(&mut self, scroll_y: f64) -> Vec<(RevealId, Toggle)> {
        self.scroll_y = scroll_y;
        self.evaluate()
    }

    /// Re-evaluate every threshold at the current offset.
    pub fn refresh(&mut self) -> Vec<(RevealId, Toggle)> {
        self.evaluate()
    }

    fn evaluate(&mut self) -> Vec<(RevealId, Toggle)> {
        let mut toggles = Vec::new();
        for (index, group) in self.reveals.iter_mut().enumerate() {
            if let Some(toggle) = group.evaluate(self.scroll_y, self.viewport) {
                toggles.push((RevealId(index), toggle));
            }
        }
        for track in &mut self.scrubs {
            if track.on_scroll(self.scroll_y, self.viewport) {
                if let Some(slot) = self.targets.get_mut(track.target().index()) {
                    track.apply(&mut slot.style);
                    slot.dirty = true;
                }
            }
        }
        toggles
    }

    /// Step every time-driven binding by `dt_ms`.
    pub fn advance(&mut self, dt_ms: f64) {
        for group in &mut self.reveals {
            if !group.advance(dt_ms) {
                continue;
            }
            for (index, member) in group.members().iter().enumerate() {
                if let Some(slot) = self.targets.get_mut(member.index()) {
                    apply_ranges(&mut slot.style, &group.profile().ranges, group.member_progress(index));
                    slot.dirty = true;
                }
            }
        }
        for entrance in &mut self.entrances {
            if entrance.advance(dt_ms) {
                if let Some(slot) = self.targets.get_mut(entrance.target().index()) {
                    entrance.apply(&mut slot.style);
                    slot.dirty = true;
                }
            }
        }
        for track in &mut self.scrubs {
            if track.advance(dt_ms) {
                if let Some(slot) = self.targets.get_mut(track.target().index()) {
                    track.apply(&mut slot.style);
                    slot.dirty = true;
                }
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.reveals.iter().any(RevealGroup::is_running)
            || self.entrances.iter().any(Entrance::is_running)
            || self.scrubs.iter().any(ScrubTrack::is_settling)
    }

    pub fn reveal_state(&self, id: RevealId) -> Option<RevealState> {
        self.reveals.get(id.0).map(RevealGroup::state)
    }

    /// Where `target` sits in layout, given a box measured with its current
    /// style applied. Triggers that are animated themselves are measured
    /// through this, or their own hidden offset would move the threshold.
    pub fn layout_bounds(&self, target: TargetId, measured: TriggerBounds) -> TriggerBounds {
        self.style(target)
            .map_or(measured, |style| style.layout_bounds(measured))
    }

    pub fn style(&self, target: TargetId) -> Option<&VisualStyle> {
        self.targets
            .get(target.index())
            .filter(|slot| !slot.retired)
            .map(|slot| &slot.style)
    }

    /// Stop writing to a target whose element went away.
    pub fn retire(&mut self, target: TargetId) {
        if let Some(slot) = self.targets.get_mut(target.index()) {
            slot.retired = true;
            slot.dirty = false;
        }
    }

    /// Styles changed since the last call, skipping retired targets.
    pub fn drain_dirty(&mut self) -> Vec<(TargetId, VisualStyle)> {
        self.targets
            .iter_mut()
            .enumerate()
            .filter(|(_, slot)| slot.dirty && !slot.retired)
            .map(|(index, slot)| {
                slot.dirty = false;
                (TargetId::from_index(index), slot.style)
            })
            .collect()
    }

    pub fn binding_count(&self) -> usize {
        self.reveals.len() + self.scrubs.len() + self.entrances.len()
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Drop every binding. Returns the live targets whose inline styles
    /// must be reverted.
    pub fn teardown(&mut self) -> Vec<TargetId> {
        let live = self
            .targets
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.retired)
            .map(|(index, _)| TargetId::from_index(index))
            .collect();
        self.reveals.clear();
        self.scrubs.clear();
        self.entrances.clear();
        self.targets.clear();
        live
    }

    fn slot_mut(&mut self, target: TargetId) -> Option<&mut TargetSlot> {
        self.targets.get_mut(target.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::{Property, PropertyRange};
    use crate::motion::trigger::Anchor;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 1000.0);

    fn page_scene() -> (MotionScene, Vec<TargetId>, RevealId, ScrubId) {
        let mut scene = MotionScene::new(VIEWPORT);
        let hero = scene.add_target();
        let cards: Vec<_> = (0..3).map(|_| scene.add_target()).collect();
        let scrub = scene.add_scrub(
            hero,
            TriggerBounds::new(0.0, 1000.0),
            ScrubSpec::new(
                Anchor::TOP_TOP,
                Anchor::BOTTOM_TOP,
                vec![PropertyRange::new(Property::TranslateY, 0.0, 150.0)],
            ),
        );
        let reveal = scene.add_reveal(
            TriggerBounds::new(1800.0, 600.0),
            cards.clone(),
            RevealProfile::rise(60.0).staggered(100.0),
        );
        let mut targets = vec![hero];
        targets.extend(cards);
        (scene, targets, reveal, scrub)
    }

    #[test]
    fn fresh_scene_starts_hidden_before_any_scroll() {
        let (mut scene, targets, reveal, _) = page_scene();
        assert_eq!(scene.reveal_state(reveal), Some(RevealState::Hidden));
        for card in &targets[1..] {
            let style = scene.style(*card).copied().unwrap_or_default();
            assert_eq!(style.opacity, 0.0);
            assert_eq!(style.translate_y, 60.0);
        }
        // the hidden styles are queued for the first flush
        assert_eq!(scene.drain_dirty().len(), 4);
        assert!(scene.drain_dirty().is_empty());
    }

    #[test]
    fn crossing_down_and_back_up_toggles_once_each_way() {
        let (mut scene, targets, reveal, _) = page_scene();
        assert!(scene.scroll_to(0.0).is_empty());
        assert_eq!(scene.scroll_to(1000.0), vec![(reveal, Toggle::Play)]);
        assert!(scene.scroll_to(1100.0).is_empty());
        scene.advance(2000.0);
        assert_eq!(scene.reveal_state(reveal), Some(RevealState::Shown));
        assert_eq!(scene.style(targets[3]).map(|s| s.opacity), Some(1.0));

        assert_eq!(scene.scroll_to(700.0), vec![(reveal, Toggle::Reverse)]);
        assert!(scene.scroll_to(600.0).is_empty());
        scene.advance(2000.0);
        assert_eq!(scene.reveal_state(reveal), Some(RevealState::Hidden));
        assert_eq!(scene.style(targets[1]).map(|s| s.opacity), Some(0.0));
    }

    #[test]
    fn scrub_follows_scroll_without_frames() {
        let (mut scene, targets, _, _) = page_scene();
        scene.drain_dirty();
        scene.scroll_to(500.0);
        assert_eq!(scene.style(targets[0]).map(|s| s.translate_y), Some(75.0));
        let dirty = scene.drain_dirty();
        assert_eq!(dirty.len(), 1);
        assert_eq!(dirty[0].0, targets[0]);
    }

    #[test]
    fn remeasuring_moves_the_threshold() {
        let (mut scene, _, reveal, scrub) = page_scene();
        scene.scroll_to(1000.0);
        // content above grew by 500px: the cards are now further down
        scene.set_reveal_bounds(reveal, TriggerBounds::new(2300.0, 600.0));
        scene.set_scrub_bounds(scrub, TriggerBounds::new(0.0, 2000.0));
        assert_eq!(scene.refresh(), vec![(reveal, Toggle::Reverse)]);
        assert!(scene.refresh().is_empty());
    }

    #[test]
    fn hidden_trigger_is_remeasured_without_its_own_offset() {
        let mut scene = MotionScene::new(VIEWPORT);
        let section = scene.add_target();
        let reveal = scene.add_reveal(
            TriggerBounds::new(1800.0, 400.0),
            vec![section],
            RevealProfile::rise(60.0),
        );
        scene.drain_dirty();

        // the element now renders 60px below its layout box
        let measured = TriggerBounds::new(1860.0, 400.0);
        let bounds = scene.layout_bounds(section, measured);
        assert_eq!(bounds, TriggerBounds::new(1800.0, 400.0));

        scene.set_reveal_bounds(reveal, bounds);
        // top edge at 80% of a 1000px viewport
        assert!(scene.scroll_to(999.0).is_empty());
        assert_eq!(scene.scroll_to(1000.0), vec![(reveal, Toggle::Play)]);
    }

    #[test]
    fn resize_then_refresh_recomputes_thresholds() {
        let (mut scene, _, reveal, _) = page_scene();
        // threshold 1800 - 800 = 1000
        scene.scroll_to(950.0);
        scene.resize(Viewport::new(800.0, 1200.0));
        // threshold 1800 - 960 = 840
        assert_eq!(scene.refresh(), vec![(reveal, Toggle::Play)]);
    }

    #[test]
    fn retired_targets_are_never_written() {
        let (mut scene, targets, _, _) = page_scene();
        scene.retire(targets[2]);
        scene.scroll_to(1500.0);
        scene.advance(500.0);
        let dirty = scene.drain_dirty();
        assert!(dirty.iter().all(|(id, _)| *id != targets[2]));
        assert!(scene.style(targets[2]).is_none());
    }

    #[test]
    fn entrance_keeps_the_scene_animating_until_done() {
        let mut scene = MotionScene::new(VIEWPORT);
        let word = scene.add_target();
        let spec = EntranceSpec::new(vec![PropertyRange::new(Property::Opacity, 0.0, 1.0)], 1200.0).delayed(300.0);
        scene.add_entrance(word, &spec, 0);
        assert!(scene.is_animating());
        scene.advance(1000.0);
        assert!(scene.is_animating());
        scene.advance(1000.0);
        assert!(!scene.is_animating());
        assert_eq!(scene.style(word).map(|s| s.opacity), Some(1.0));
    }

    #[test]
    fn teardown_releases_every_binding() {
        let (mut scene, targets, _, _) = page_scene();
        scene.retire(targets[1]);
        scene.scroll_to(1500.0);
        let reverted = scene.teardown();
        assert_eq!(reverted.len(), 3);
        assert!(!reverted.contains(&targets[1]));
        assert_eq!(scene.binding_count(), 0);
        assert_eq!(scene.target_count(), 0);
        assert!(!scene.is_animating());
        assert!(scene.drain_dirty().is_empty());
    }
}
