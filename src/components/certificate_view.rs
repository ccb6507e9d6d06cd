use yew::prelude::*;

use crate::components::toast::use_toaster;
use crate::download::download_file;
use crate::models::certificate::{today, Certificate, Enrollment};

#[derive(Properties, PartialEq)]
pub struct CertificateViewProps {
    pub enrollment: Enrollment,
}

#[function_component(CertificateView)]
pub fn certificate_view(props: &CertificateViewProps) -> Html {
    let toaster = use_toaster();
    let enrollment = &props.enrollment;

    let Some(certificate) = Certificate::assemble(enrollment, today()) else {
        return html! {
            <div class="certificate-pending">
                <h2>{"Your certificate is still in the forge"}</h2>
                <p>{format!("{} is {}% complete. Finish every scroll to unlock your certificate.", enrollment.course_title, enrollment.progress)}</p>
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {}%;", enrollment.progress)}></div>
                </div>
            </div>
        };
    };

    let svg = certificate.render_svg();
    let preview_src = format!("data:image/svg+xml;charset=utf-8,{}", urlencoding::encode(&svg));

    let on_download = {
        let svg = svg.clone();
        let file_name = certificate.file_name();
        Callback::from(move |_: MouseEvent| {
            match download_file(&file_name, "image/svg+xml", &svg) {
                Ok(()) => {
                    gloo_console::log!("Downloaded", file_name.clone());
                    toaster.info("Certificate saved to your downloads.");
                }
                Err(e) => {
                    log::error!("Certificate download failed: {:?}", e);
                    toaster.error("Download failed. Please try again.");
                }
            }
        })
    };

    html! {
        <div class="certificate-ready">
            <h2>{format!("Congratulations, {}!", certificate.student_name)}</h2>
            <p>{format!("Completed on {}", certificate.completion_date_label())}</p>
            <div class="certificate-preview">
                <img src={preview_src} alt="Certificate preview" />
            </div>
            <button class="certificate-download" onclick={on_download}>{"⬇️ Download certificate"}</button>
        </div>
    }
}
