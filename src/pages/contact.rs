use dioxus::prelude::*;

#[component]
pub fn ContactPage() -> Element {
    rsx! {
        div { class: "page",
            h1 { "Contact Us" }
            p { class: "muted", "Questions about a recharge? We are here round the clock." }

            div { class: "contact-grid",
                div { class: "card contact-card",
                    h3 { "Customer Support" }
                    p { "1800-123-4567" }
                    p { class: "muted small", "Toll-free, 24x7" }
                }
                div { class: "card contact-card",
                    h3 { "Email" }
                    p { "support@mobilerecharge.example" }
                    p { class: "muted small", "Replies within one business day" }
                }
                div { class: "card contact-card",
                    h3 { "Head Office" }
                    p { "MobileRecharge Pvt Ltd" }
                    p { class: "muted small", "Bengaluru, India" }
                }
            }

            div { class: "card",
                h3 { "Frequently asked" }
                div { class: "faq-item",
                    strong { "My recharge shows pending. What now?" }
                    p { class: "muted",
                        "Most pending recharges settle within a few minutes. If it stays pending, contact support with your transaction ID."
                    }
                }
                div { class: "faq-item",
                    strong { "Can I recharge a different number?" }
                    p { class: "muted",
                        "Yes. Enter any 10-digit mobile number on the recharge page."
                    }
                }
            }
        }
    }
}
