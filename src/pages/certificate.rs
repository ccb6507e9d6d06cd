use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::flame_course;
use crate::components::certificate_view::CertificateView;
use crate::models::certificate::Enrollment;
use crate::state::{ProgressContext, SessionContext};
use crate::Route;

#[function_component(CertificatePage)]
pub fn certificate_page() -> Html {
    let course = use_memo(|_| flame_course(), ());
    let session = use_context::<SessionContext>()
        .map(|session| (*session).clone())
        .unwrap_or_default();
    let progress = use_context::<ProgressContext>();
    let Some(progress) = progress else {
        log::error!("Certificate page rendered without progress context");
        return html! {};
    };

    let enrollment = Enrollment::from_progress(&course, &progress, session.display_name());

    html! {
        <div class="certificate-page">
            <style>
                {r#"
                    .certificate-page { max-width: 1000px; margin: 0 auto; padding: 6rem 1.5rem 3rem; color: #fff; text-align: center; }
                    .certificate-preview img { width: 100%; max-width: 880px; border-radius: 8px; box-shadow: 0 16px 32px rgba(0, 0, 0, 0.4); }
                    .certificate-download {
                        margin-top: 1.5rem;
                        padding: 0.9rem 2rem;
                        border: none;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #E76F51, #F4A261);
                        color: #fff;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .certificate-pending .progress-track { max-width: 480px; margin: 1.5rem auto; }
                "#}
            </style>
            <CertificateView enrollment={enrollment} />
            <p>
                <Link<Route> to={Route::Course} classes="back-link">{"← Back to the course"}</Link<Route>>
            </p>
        </div>
    }
}
