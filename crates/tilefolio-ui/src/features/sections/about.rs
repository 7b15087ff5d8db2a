//! About page testimonials.

use tilefolio_content::Testimonial;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AboutBodyProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(AboutBody)]
pub(crate) fn about_body(props: &AboutBodyProps) -> Html {
    if props.testimonials.is_empty() {
        return html! {};
    }
    html! {
        <section class="testimonials" aria-label="Testimonials">
            <h2 class="testimonials__title">{"Testimonials"}</h2>
            {for props.testimonials.iter().map(|testimonial| html! {
                <figure class="testimonial">
                    <blockquote>{testimonial.text.clone()}</blockquote>
                    <figcaption>{format!("— {}", testimonial.author)}</figcaption>
                </figure>
            })}
        </section>
    }
}
