use yew::prelude::*;

use crate::content::Faq;

/// Accordion state after clicking `index`: at most one answer is open.
fn toggled(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub items: &'static [Faq],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { for props.items.iter().enumerate().map(|(index, faq)| {
                let expanded = *open == Some(index);
                let onclick = {
                    let open = open.clone();
                    Callback::from(move |_: MouseEvent| open.set(toggled(*open, index)))
                };
                html! {
                    <div class={classes!("faq-item", expanded.then(|| "open"))}>
                        <button class="faq-question" aria-expanded={expanded.to_string()} {onclick}>
                            <span>{faq.question}</span>
                            <span class="toggle-icon">{if expanded { "−" } else { "+" }}</span>
                        </button>
                        <div class="faq-answer">
                            <p>{faq.answer}</p>
                        </div>
                    </div>
                }
            }) }
            <style>
                {r#"
                .faq-item {
                    border-bottom: 1px solid rgba(45, 59, 47, 0.15);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    padding: 1.2rem 0;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                    color: inherit;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 400px;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_answer_closes_the_other() {
        let open = toggled(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggled(open, 0), Some(0));
    }

    #[test]
    fn clicking_the_open_question_collapses_it() {
        assert_eq!(toggled(Some(1), 1), None);
    }
}
