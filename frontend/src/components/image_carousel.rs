use shared::carousel::{Carousel, CarouselLayout};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ImageCarouselProps {
    pub images: Vec<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ImageCarousel)]
pub fn image_carousel(props: &ImageCarouselProps) -> Html {
    let carousel = use_state(|| Carousel::new(props.images.len()));
    let len = props.images.len();

    // The image list can change under us; restart from the first slide.
    {
        let carousel = carousel.clone();
        use_effect_with(len, move |len| {
            if carousel.len() != *len {
                carousel.set(Carousel::new(*len));
            }
            || ()
        });
    }

    // Until the effect above runs, view the stored position against the current list.
    let view = carousel.resized(len);

    let step = |forward: bool| {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = carousel.resized(len);
            if forward {
                next.next();
            } else {
                next.previous();
            }
            carousel.set(next);
        })
    };

    match view.layout() {
        CarouselLayout::Empty => html! {},
        CarouselLayout::Single => html! {
            <img src={props.images[0].clone()} alt="" class={classes!(styles::CAROUSEL_IMAGE, props.class.clone())} />
        },
        CarouselLayout::Slides => {
            let index = view.index();
            html! {
                <div class={classes!(styles::CAROUSEL, props.class.clone())}>
                    <img
                        src={props.images[index].clone()}
                        alt={format!("Slide {}", index + 1)}
                        class={styles::CAROUSEL_IMAGE}
                    />

                    <button type="button" onclick={step(false)} class={styles::CAROUSEL_PREV}>{"‹"}</button>
                    <button type="button" onclick={step(true)} class={styles::CAROUSEL_NEXT}>{"›"}</button>

                    <div class={styles::CAROUSEL_DOTS}>
                        { for (0..len).map(|i| {
                            let carousel = carousel.clone();
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                let mut next = carousel.resized(len);
                                next.go_to(i);
                                carousel.set(next);
                            });
                            let class = if i == index { styles::CAROUSEL_DOT_ACTIVE } else { styles::CAROUSEL_DOT };
                            html! { <button type="button" key={i} {onclick} {class}></button> }
                        }) }
                    </div>

                    <div class={styles::CAROUSEL_COUNTER}>{view.counter()}</div>
                </div>
            }
        }
    }
}
