use yew::prelude::*;
use web_sys::MouseEvent;

/// Which one of a fixed number of items is expanded, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// An out-of-range `initial` starts fully collapsed.
    pub fn new(len: usize, initial: Option<usize>) -> Self {
        Self {
            len,
            open: initial.filter(|&index| index < len),
        }
    }

    /// Clicking the open item collapses it; clicking any other opens it and
    /// closes the previous one. Indices past the end are ignored.
    pub fn toggle(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        let open = if self.open == Some(index) { None } else { Some(index) };
        Self { open, ..self }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[derive(Clone, PartialEq)]
pub struct AccordionEntry {
    pub key: AttrValue,
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub body: Html,
}

#[derive(Properties, PartialEq)]
pub struct AccordionListProps {
    pub entries: Vec<AccordionEntry>,
    /// Key of the entry expanded on mount.
    #[prop_or_default]
    pub initially_open: Option<AttrValue>,
    /// Extra classes for every item, e.g. the reveal marker.
    #[prop_or_default]
    pub item_class: Classes,
}

#[function_component(AccordionList)]
pub fn accordion_list(props: &AccordionListProps) -> Html {
    let state = {
        let len = props.entries.len();
        let initial = props
            .initially_open
            .as_ref()
            .and_then(|key| props.entries.iter().position(|entry| &entry.key == key));
        use_state(move || Accordion::new(len, initial))
    };

    html! {
        <div class="accordion">
            {
                props.entries.iter().enumerate().map(|(index, entry)| {
                    let open = state.is_open(index);
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            state.set(state.toggle(index));
                        })
                    };
                    html! {
                        <div key={entry.key.to_string()} class={classes!("accordion-item", props.item_class.clone(), open.then_some("open"))}>
                            <button class="accordion-header" aria-expanded={open.to_string()} {onclick}>
                                <div class="accordion-heading">
                                    <h3>{ entry.title.clone() }</h3>
                                    <p>{ entry.subtitle.clone() }</p>
                                </div>
                                <span class={classes!("accordion-chevron", open.then_some("rotated"))}>{"⌄"}</span>
                            </button>
                            <div class="accordion-panel" aria-hidden={(!open).to_string()}>
                                <div class="accordion-body">
                                    { entry.body.clone() }
                                </div>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
            <style>
                {r#"
                .accordion {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .accordion-item {
                    background: #ffffff;
                    border: 1px solid #eef0ee;
                    border-radius: 1rem;
                    box-shadow: 0 10px 30px rgba(30, 45, 40, 0.08);
                    overflow: hidden;
                }
                .accordion-header {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1.5rem 2rem;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .accordion-header:hover {
                    background: #f8f9f8;
                }
                .accordion-heading h3 {
                    margin: 0;
                    font-size: 1.4rem;
                    color: #1e2d28;
                }
                .accordion-heading p {
                    margin: 0.25rem 0 0;
                    font-size: 0.9rem;
                    color: #4a7c59;
                }
                .accordion-chevron {
                    font-size: 1.5rem;
                    color: #4a7c59;
                    transition: transform 0.3s ease;
                }
                .accordion-chevron.rotated {
                    transform: rotate(180deg);
                }
                .accordion-panel {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease, opacity 0.5s ease;
                }
                .accordion-item.open .accordion-panel {
                    max-height: 600px;
                    opacity: 1;
                }
                .accordion-body {
                    padding: 0 2rem 2rem;
                    border-top: 1px solid #eef0ee;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn opening_another_item_closes_the_current_one() {
        let accordion = Accordion::new(5, Some(0)).toggle(3);
        assert_eq!(accordion.open_index(), Some(3));
        assert!(!accordion.is_open(0));
    }

    #[test]
    fn clicking_the_open_item_collapses_everything() {
        let accordion = Accordion::new(5, Some(2)).toggle(2);
        assert_eq!(accordion.open_index(), None);
        assert!((0..5).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn initial_state_is_validated() {
        assert_eq!(Accordion::new(3, Some(3)).open_index(), None);
        assert_eq!(Accordion::new(3, None).open_index(), None);
        assert_eq!(Accordion::new(0, Some(0)).open_index(), None);
    }

    #[test]
    fn out_of_range_clicks_are_ignored() {
        let accordion = Accordion::new(2, Some(1));
        assert_eq!(accordion.toggle(7), accordion);
    }

    proptest! {
        #[test]
        fn never_more_than_one_open(len in 1usize..12, clicks in proptest::collection::vec(0usize..16, 0..40)) {
            let accordion = clicks
                .into_iter()
                .fold(Accordion::new(len, Some(0)), Accordion::toggle);
            let open = (0..len).filter(|&i| accordion.is_open(i)).count();
            prop_assert!(open <= 1);
            if let Some(index) = accordion.open_index() {
                prop_assert!(index < len);
            }
        }
    }
}
