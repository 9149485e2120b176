use leptos::*;
use crate::components::reaction_bar::ReactionBar;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <div>
            <h3>{ "Reviews" }</h3>
            <ul>
                {
                    reviews.into_iter().map(|review| {
                        view! {
                            <li>
                                <p>{ review.content }</p>
                                <small>{ review.author }</small>
                                <ReactionBar review_id=review.id summary=review.reactions />
                            </li>
                        }
                    }).collect::<Vec<_>>()
                }
            </ul>
        </div>
    }
}
