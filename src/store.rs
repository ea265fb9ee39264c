//! Slide element store.
//!
//! Holds the slide being edited, the selection cursor and generation state.
//! Element order is paint order (first = back, last = front); only
//! `bring_forward` and `send_backward` change it.
//!
//! The slide lives behind an `Arc`. Every mutation goes through
//! `Arc::make_mut`, so a snapshot taken with [`SlideStore::slide`] is never
//! changed by later edits.

use std::sync::Arc;

use crate::constants::editor;
use crate::error::Error;
use crate::generator::SlideGenerator;
use crate::slide::{default_slide, ElementPatch, SlideData, SlideElement};
use crate::types::ElementId;

/// Handle for one in-flight generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    seq: u64,
    prompt: String,
}

impl GenerationTicket {
    /// Prompt to send to the generator.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Sequence number; later tickets have larger numbers.
    pub const fn seq(&self) -> u64 {
        self.seq
    }
}

/// What a generation request did to the store.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// Prompt was blank; no request was made.
    Skipped,
    /// The generated slide replaced the current one.
    Applied,
    /// The request failed; the previous slide is untouched.
    Failed(Error),
    /// A newer request was started before this one finished; result dropped.
    Superseded,
}

/// The single editable slide plus selection and generation state.
#[derive(Debug)]
pub struct SlideStore {
    slide: Option<Arc<SlideData>>,
    selected: Option<ElementId>,
    is_generating: bool,
    last_error: Option<String>,
    latest_ticket: u64,
}

impl Default for SlideStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideStore {
    /// Store seeded with the default slide.
    pub fn new() -> Self {
        Self::with_slide(Some(default_slide()))
    }

    /// Store seeded with `slide` (or nothing).
    pub fn with_slide(slide: Option<SlideData>) -> Self {
        Self {
            slide: slide.map(Arc::new),
            selected: None,
            is_generating: false,
            last_error: None,
            latest_ticket: 0,
        }
    }

    /// Snapshot of the current slide.
    pub fn slide(&self) -> Option<Arc<SlideData>> {
        self.slide.as_ref().map(Arc::clone)
    }

    /// Borrow the current slide.
    pub fn slide_ref(&self) -> Option<&SlideData> {
        self.slide.as_deref()
    }

    /// Id under the selection cursor, whether or not it exists on the slide.
    pub fn selected_element_id(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    /// The selected element, if the selection names one that exists.
    pub fn selected_element(&self) -> Option<&SlideElement> {
        let id = self.selected.as_ref()?;
        self.slide_ref()?.element(id)
    }

    /// Element with `id` on the current slide.
    pub fn element(&self, id: &ElementId) -> Option<&SlideElement> {
        self.slide_ref()?.element(id)
    }

    /// Whether a generation request is in flight.
    pub const fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// Message from the most recent failed generation, cleared by the next request.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the slide. Selection is left as is.
    pub fn set_slide(&mut self, slide: SlideData) {
        tracing::debug!(slide = %slide.id, elements = slide.elements.len(), "slide replaced");
        self.slide = Some(Arc::new(slide));
    }

    /// Move the selection cursor. The id is not checked against the slide.
    pub fn set_selected_element(&mut self, id: Option<ElementId>) {
        self.selected = id;
    }

    fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.slide_ref()?.index_of(id)
    }

    fn elements_mut(&mut self) -> Option<&mut Vec<SlideElement>> {
        self.slide.as_mut().map(|slide| &mut Arc::make_mut(slide).elements)
    }

    /// Merge `patch` into the element with `id`. Returns false if there is none.
    ///
    /// An empty patch leaves the current snapshot shared.
    pub fn update_element(&mut self, id: &ElementId, patch: &ElementPatch) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(%id, "update_element: no such element");
            return false;
        };
        if patch.is_empty() {
            return true;
        }
        if let Some(elements) = self.elements_mut() {
            patch.apply_to(&mut elements[index]);
        }
        true
    }

    /// Remove the element with `id`, clearing the selection if it pointed there.
    pub fn delete_element(&mut self, id: &ElementId) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(%id, "delete_element: no such element");
            return false;
        };
        if let Some(elements) = self.elements_mut() {
            elements.remove(index);
        }
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        true
    }

    /// Copy the element with `id` to the top of the paint order, nudged by
    /// (+24, +24), and select the copy. Returns the new id.
    pub fn duplicate_element(&mut self, id: &ElementId) -> Option<ElementId> {
        let slide = self.slide_ref()?;
        let Some(source) = slide.element(id) else {
            tracing::debug!(%id, "duplicate_element: no such element");
            return None;
        };

        let new_id = fresh_id(slide, id);
        let mut copy = source.clone();
        copy.id = new_id.clone();
        copy.position = source
            .position
            .offset(editor::DUPLICATE_NUDGE, editor::DUPLICATE_NUDGE);
        copy.z_index = source.z_index.saturating_add(1);

        self.elements_mut()?.push(copy);
        self.selected = Some(new_id.clone());
        Some(new_id)
    }

    /// Swap the element with its successor, painting it one step later.
    pub fn bring_forward(&mut self, id: &ElementId) -> bool {
        let len = self.slide_ref().map_or(0, |slide| slide.elements.len());
        match self.index_of(id) {
            Some(index) if index + 1 < len => {
                if let Some(elements) = self.elements_mut() {
                    elements.swap(index, index + 1);
                }
                true
            }
            _ => false,
        }
    }

    /// Swap the element with its predecessor, painting it one step earlier.
    pub fn send_backward(&mut self, id: &ElementId) -> bool {
        match self.index_of(id) {
            Some(index) if index > 0 => {
                if let Some(elements) = self.elements_mut() {
                    elements.swap(index, index - 1);
                }
                true
            }
            _ => false,
        }
    }

    /// Start a generation request. Returns `None` for a blank prompt.
    ///
    /// Starting a new request while one is in flight supersedes the older
    /// one: only the newest ticket's result is applied.
    pub fn begin_generation(&mut self, prompt: &str) -> Option<GenerationTicket> {
        if prompt.trim().is_empty() {
            return None;
        }
        self.latest_ticket += 1;
        self.is_generating = true;
        self.last_error = None;
        tracing::info!(ticket = self.latest_ticket, "slide generation started");
        Some(GenerationTicket {
            seq: self.latest_ticket,
            prompt: prompt.to_string(),
        })
    }

    /// Apply the result of a request started with [`Self::begin_generation`].
    pub fn finish_generation(
        &mut self,
        ticket: &GenerationTicket,
        result: crate::error::Result<SlideData>,
    ) -> GenerationOutcome {
        if ticket.seq != self.latest_ticket {
            tracing::debug!(ticket = ticket.seq, latest = self.latest_ticket, "stale generation result dropped");
            return GenerationOutcome::Superseded;
        }
        self.is_generating = false;

        match result {
            Ok(slide) => {
                tracing::info!(ticket = ticket.seq, slide = %slide.id, "slide generation applied");
                self.slide = Some(Arc::new(slide));
                self.selected = None;
                GenerationOutcome::Applied
            }
            Err(e) => {
                tracing::error!(ticket = ticket.seq, error = %e, "slide generation failed");
                self.last_error = Some(e.to_string());
                GenerationOutcome::Failed(e)
            }
        }
    }

    /// Generate a slide for `prompt` and apply it.
    pub async fn generate_slide(
        &mut self,
        generator: &dyn SlideGenerator,
        prompt: &str,
    ) -> GenerationOutcome {
        let Some(ticket) = self.begin_generation(prompt) else {
            return GenerationOutcome::Skipped;
        };
        let result = generator.generate(ticket.prompt()).await;
        self.finish_generation(&ticket, result)
    }
}

/// `<source>-<hex>` that no element on `slide` uses yet.
fn fresh_id(slide: &SlideData, source: &ElementId) -> ElementId {
    loop {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        let candidate = ElementId::new(format!("{source}-{}", &suffix[..editor::ID_SUFFIX_LEN]));
        if !slide.contains(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::slide::{ElementStyle, Position, Size};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn id(s: &str) -> ElementId {
        ElementId::new(s)
    }

    fn order(store: &SlideStore) -> Vec<String> {
        store
            .slide_ref()
            .unwrap()
            .elements
            .iter()
            .map(|e| e.id.to_string())
            .collect()
    }

    /// Generator that counts calls and either succeeds or fails.
    struct StubGenerator {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubGenerator {
        fn new(fail: bool) -> Self {
            Self { calls: AtomicUsize::new(0), fail }
        }
    }

    #[async_trait]
    impl SlideGenerator for StubGenerator {
        async fn generate(&self, prompt: &str) -> crate::error::Result<SlideData> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::generation_status("boom", 502));
            }
            let mut slide = default_slide();
            slide.name = prompt.to_string();
            slide.elements.truncate(1);
            Ok(slide)
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    #[test]
    fn test_update_style_is_deep_merged() {
        let mut store = SlideStore::new();
        let before = store.element(&id("title")).unwrap().style.clone();

        let patch = ElementPatch::style(ElementStyle {
            color: Some("red".to_string()),
            ..ElementStyle::default()
        });
        assert!(store.update_element(&id("title"), &patch));

        let after = &store.element(&id("title")).unwrap().style;
        assert_eq!(after.color.as_deref(), Some("red"));
        assert_eq!(after.font_family, before.font_family);
        assert_eq!(after.font_size, before.font_size);
        assert_eq!(after.font_weight, before.font_weight);
        assert_eq!(after.text_align, before.text_align);
    }

    #[test]
    fn test_update_position_replaces_whole_pair() {
        let mut store = SlideStore::new();
        store.update_element(&id("title"), &ElementPatch::position(Position::new(1.0, 2.0)));
        let el = store.element(&id("title")).unwrap();
        assert_eq!(el.position, Position::new(1.0, 2.0));
        assert_eq!(el.size, Size::new(1200.0, 160.0));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = SlideStore::new();
        let snapshot = store.slide().unwrap();
        assert!(!store.update_element(&id("ghost"), &ElementPatch::content("x")));
        assert!(Arc::ptr_eq(&snapshot, &store.slide().unwrap()));
    }

    #[test]
    fn test_empty_patch_keeps_snapshot_shared() {
        let mut store = SlideStore::new();
        let snapshot = store.slide().unwrap();
        assert!(store.update_element(&id("title"), &ElementPatch::default()));
        assert!(Arc::ptr_eq(&snapshot, &store.slide().unwrap()));
    }

    #[test]
    fn test_update_keeps_order() {
        let mut store = SlideStore::new();
        let before = order(&store);
        store.update_element(&id("accent"), &ElementPatch::content("hello"));
        assert_eq!(order(&store), before);
    }

    #[test]
    fn test_delete_unknown_id_leaves_elements_identical() {
        let mut store = SlideStore::new();
        let before = store.slide_ref().unwrap().elements.clone();
        assert!(!store.delete_element(&id("ghost")));
        assert_eq!(store.slide_ref().unwrap().elements, before);
    }

    #[test]
    fn test_delete_clears_selection_only_when_selected() {
        let mut store = SlideStore::new();
        store.set_selected_element(Some(id("subtitle")));
        store.delete_element(&id("accent"));
        assert_eq!(store.selected_element_id(), Some(&id("subtitle")));

        store.delete_element(&id("subtitle"));
        assert!(store.selected_element_id().is_none());
        assert_eq!(order(&store), vec!["title", "card-1"]);
    }

    #[test]
    fn test_duplicate_appends_nudged_copy_and_selects_it() {
        let mut store = SlideStore::new();
        let before_len = order(&store).len();
        let source = store.element(&id("accent")).unwrap().clone();

        let new_id = store.duplicate_element(&id("accent")).unwrap();
        let slide = store.slide_ref().unwrap();

        assert_eq!(slide.elements.len(), before_len + 1);
        assert!(slide.has_unique_ids());
        let copy = slide.elements.last().unwrap();
        assert_eq!(copy.id, new_id);
        assert_eq!(copy.position, Position::new(source.position.x + 24.0, source.position.y + 24.0));
        assert_eq!(copy.z_index, source.z_index + 1);
        assert_eq!(copy.style, source.style);
        assert_eq!(store.selected_element_id(), Some(&new_id));
    }

    #[test]
    fn test_duplicate_twice_yields_distinct_ids() {
        let mut store = SlideStore::new();
        let a = store.duplicate_element(&id("title")).unwrap();
        let b = store.duplicate_element(&id("title")).unwrap();
        assert_ne!(a, b);
        assert!(store.slide_ref().unwrap().has_unique_ids());
    }

    #[test]
    fn test_duplicate_unknown_id_is_noop() {
        let mut store = SlideStore::new();
        store.set_selected_element(Some(id("title")));
        assert!(store.duplicate_element(&id("ghost")).is_none());
        assert_eq!(order(&store).len(), 4);
        assert_eq!(store.selected_element_id(), Some(&id("title")));
    }

    #[test]
    fn test_forward_then_backward_round_trips_interior() {
        let mut store = SlideStore::new();
        let before = order(&store);
        assert!(store.bring_forward(&id("subtitle")));
        assert_eq!(order(&store), vec!["title", "accent", "subtitle", "card-1"]);
        assert!(store.send_backward(&id("subtitle")));
        assert_eq!(order(&store), before);
    }

    #[test]
    fn test_reorder_at_boundaries() {
        let mut store = SlideStore::new();
        let before = order(&store);

        // Last element: forward is a no-op, backward moves it.
        assert!(!store.bring_forward(&id("card-1")));
        assert_eq!(order(&store), before);
        assert!(store.send_backward(&id("card-1")));
        assert_eq!(order(&store), vec!["title", "subtitle", "card-1", "accent"]);

        // First element: backward is a no-op, forward moves it.
        let mut store = SlideStore::new();
        assert!(!store.send_backward(&id("title")));
        assert_eq!(order(&store), before);
        assert!(store.bring_forward(&id("title")));
        assert_eq!(order(&store), vec!["subtitle", "title", "accent", "card-1"]);

        assert!(!store.bring_forward(&id("ghost")));
        assert!(!store.send_backward(&id("ghost")));
    }

    #[test]
    fn test_snapshots_survive_mutation() {
        let mut store = SlideStore::new();
        let snapshot = store.slide().unwrap();
        store.delete_element(&id("title"));
        store.bring_forward(&id("subtitle"));

        assert_eq!(snapshot.elements.len(), 4);
        assert_eq!(snapshot.elements[0].id, id("title"));
        assert_eq!(order(&store).len(), 3);
    }

    #[test]
    fn test_selection_accepts_unknown_id() {
        let mut store = SlideStore::new();
        store.set_selected_element(Some(id("ghost")));
        assert_eq!(store.selected_element_id(), Some(&id("ghost")));
        assert!(store.selected_element().is_none());
    }

    #[test]
    fn test_set_slide_keeps_selection() {
        let mut store = SlideStore::new();
        store.set_selected_element(Some(id("title")));
        let mut replacement = default_slide();
        replacement.name = "Other".to_string();
        store.set_slide(replacement);
        assert_eq!(store.slide_ref().unwrap().name, "Other");
        assert_eq!(store.selected_element_id(), Some(&id("title")));
    }

    #[test]
    fn test_operations_on_empty_store_are_noops() {
        let mut store = SlideStore::with_slide(None);
        assert!(!store.update_element(&id("title"), &ElementPatch::content("x")));
        assert!(!store.delete_element(&id("title")));
        assert!(store.duplicate_element(&id("title")).is_none());
        assert!(!store.bring_forward(&id("title")));
        assert!(store.slide().is_none());
    }

    #[tokio::test]
    async fn test_blank_prompt_issues_no_request() {
        let mut store = SlideStore::new();
        let generator = StubGenerator::new(false);
        let snapshot = store.slide().unwrap();

        let outcome = store.generate_slide(&generator, "   \t").await;

        assert!(matches!(outcome, GenerationOutcome::Skipped));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
        assert!(!store.is_generating());
        assert!(Arc::ptr_eq(&snapshot, &store.slide().unwrap()));
    }

    #[tokio::test]
    async fn test_success_replaces_slide_and_clears_selection() {
        let mut store = SlideStore::new();
        store.set_selected_element(Some(id("title")));
        let generator = StubGenerator::new(false);

        let outcome = store.generate_slide(&generator, "hello").await;

        assert!(matches!(outcome, GenerationOutcome::Applied));
        assert_eq!(store.slide_ref().unwrap().name, "hello");
        assert!(store.selected_element_id().is_none());
        assert!(!store.is_generating());
        assert!(store.last_error().is_none());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_slide() {
        let mut store = SlideStore::new();
        store.set_selected_element(Some(id("title")));
        let snapshot = store.slide().unwrap();
        let generator = StubGenerator::new(true);

        let outcome = store.generate_slide(&generator, "hello").await;

        match outcome {
            GenerationOutcome::Failed(e) => assert_eq!(e.status(), Some(502)),
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(Arc::ptr_eq(&snapshot, &store.slide().unwrap()));
        assert!(!store.is_generating());
        assert!(store.last_error().is_some());
        assert_eq!(store.selected_element_id(), Some(&id("title")));
    }

    #[test]
    fn test_older_ticket_is_superseded() {
        let mut store = SlideStore::new();
        let first = store.begin_generation("one").unwrap();
        let second = store.begin_generation("two").unwrap();
        assert!(second.seq() > first.seq());

        let mut late = default_slide();
        late.name = "one".to_string();
        let outcome = store.finish_generation(&first, Ok(late));
        assert!(matches!(outcome, GenerationOutcome::Superseded));
        assert!(store.is_generating());
        assert_eq!(store.slide_ref().unwrap().name, "AI Generated Concept");

        let mut fresh = default_slide();
        fresh.name = "two".to_string();
        assert!(matches!(store.finish_generation(&second, Ok(fresh)), GenerationOutcome::Applied));
        assert!(!store.is_generating());
        assert_eq!(store.slide_ref().unwrap().name, "two");
    }

    #[test]
    fn test_new_request_clears_last_error() {
        let mut store = SlideStore::new();
        let ticket = store.begin_generation("x").unwrap();
        store.finish_generation(&ticket, Err(Error::Network("down".into())));
        assert!(store.last_error().unwrap().contains("down"));

        let _ticket = store.begin_generation("y").unwrap();
        assert!(store.last_error().is_none());
    }
}
