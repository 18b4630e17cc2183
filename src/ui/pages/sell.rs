use dioxus::prelude::*;
use tracing::debug;

use crate::app::QUOTE_CALCULATION_DELAY;
use crate::domain::{
    models_for_brand, AppState, BodyCondition, FunctionalCheck, ScreenCondition, SellRequest,
    SellStage, AGE_OPTIONS, BRANDS, STORAGE_OPTIONS,
};
use crate::ui::components::stage_progress::StageProgress;
use crate::ui::pages::quote::{PickupPanel, QuoteResult};
use crate::ui::theme;

#[component]
pub fn SellPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    // The calculation timer belongs to the previous visit and died with it.
    use_hook(move || {
        if state.peek().sell.is_calculating() {
            debug!("abandoned quote calculation found on return");
            state.with_mut(|s| s.sell.cancel_assessment());
        }
    });

    let (stage, request) = state.with(|s| (s.sell.stage(), s.sell.request().clone()));

    match stage {
        SellStage::Quote => rsx! { QuoteResult { request } },
        SellStage::Schedule => rsx! { PickupPanel { request } },
        _ => rsx! {
            div { class: "max-w-3xl mx-auto px-4 py-12",
                StageProgress { stage }
                {match stage {
                    SellStage::DeviceSelect => rsx! { DeviceStep { request } },
                    SellStage::Specs => rsx! { SpecsStep { request } },
                    _ => rsx! { DiagnosticsStep { request, calculating: stage == SellStage::Calculating } },
                }}
            }
        },
    }
}

#[component]
fn DeviceStep(request: SellRequest) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let can_advance = state.with(|s| s.sell.can_advance());

    rsx! {
        div { class: "space-y-8 fade-in",
            h2 { class: "text-3xl font-black text-gray-900 leading-tight",
                "Which phone are you "
                span { class: "text-indigo-600", "selling?" }
            }

            div { class: "space-y-4",
                p { class: "font-bold text-gray-700", "Select Brand" }
                div { class: "grid grid-cols-3 sm:grid-cols-6 gap-3",
                    for brand in BRANDS {
                        {
                            let selected = request.brand == Some(brand);
                            rsx! {
                                button {
                                    key: "{brand}",
                                    class: if selected { "p-4 rounded-2xl border-2 transition-all flex flex-col items-center justify-center gap-2 border-indigo-600 bg-indigo-50 shadow-md" } else { "p-4 rounded-2xl border-2 transition-all flex flex-col items-center justify-center gap-2 border-gray-100 bg-white hover:border-gray-300" },
                                    onclick: move |_| {
                                        state.with_mut(|s| s.sell.select_brand(brand));
                                    },
                                    img { class: "h-6 w-auto opacity-80", src: brand.logo_url(), alt: brand.name() }
                                    span {
                                        class: if selected { "text-[10px] font-bold uppercase tracking-widest text-indigo-700" } else { "text-[10px] font-bold uppercase tracking-widest text-gray-400" },
                                        "{brand}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(brand) = request.brand {
                div { class: "space-y-4 pt-4 zoom-in",
                    p { class: "font-bold text-gray-700", "Select Model" }
                    div { class: "grid grid-cols-2 sm:grid-cols-3 gap-4",
                        for model in models_for_brand(brand).copied() {
                            {
                                let selected = request.model.map(|m| m.id) == Some(model.id);
                                rsx! {
                                    button {
                                        key: "{model.id}",
                                        class: if selected { "flex flex-col items-center p-5 rounded-3xl border-2 transition-all border-indigo-600 bg-indigo-50 shadow-lg" } else { "flex flex-col items-center p-5 rounded-3xl border-2 transition-all border-gray-100 bg-white hover:border-indigo-200" },
                                        onclick: move |_| {
                                            state.with_mut(|s| s.sell.select_model(model));
                                        },
                                        div { class: "w-full aspect-square mb-4 flex items-center justify-center",
                                            img { class: "max-h-full max-w-full object-contain", src: model.image, alt: model.name }
                                        }
                                        span { class: "text-sm text-center {theme::option_title(selected)}", "{model.name}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "pt-6",
                button {
                    class: "{theme::btn_primary()}",
                    disabled: !can_advance,
                    onclick: move |_| {
                        state.with_mut(|s| s.sell.advance());
                    },
                    "Check Exact Value"
                }
            }
        }
    }
}

#[component]
fn SpecsStep(request: SellRequest) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let can_advance = state.with(|s| s.sell.can_advance());
    let brand = request.brand.map(|b| b.name()).unwrap_or_default();
    let (model_name, model_image) = request
        .model
        .map(|m| (m.name, m.image))
        .unwrap_or_default();

    rsx! {
        div { class: "space-y-8 slide-in",
            div { class: "flex items-center space-x-6 {theme::panel()}",
                img { class: "w-20 h-20 object-contain", src: model_image, alt: model_name }
                div {
                    p { class: "text-[10px] font-black text-indigo-600 uppercase tracking-widest", "{brand}" }
                    h2 { class: "text-2xl font-black text-gray-900 leading-tight", "{model_name}" }
                    button {
                        class: "{theme::btn_link()}",
                        onclick: move |_| {
                            state.with_mut(|s| s.sell.back());
                        },
                        "← Change device"
                    }
                }
            }

            div { class: "space-y-8 {theme::panel()}",
                div {
                    label { class: "{theme::label_class()}", "1. Storage Capacity" }
                    div { class: "grid grid-cols-2 sm:grid-cols-5 gap-3",
                        for option in STORAGE_OPTIONS {
                            button {
                                key: "{option}",
                                class: "{theme::chip(request.storage == Some(option))}",
                                onclick: move |_| {
                                    state.with_mut(|s| s.sell.select_storage(option));
                                },
                                "{option}"
                            }
                        }
                    }
                }
                div {
                    label { class: "{theme::label_class()}", "2. Device Age" }
                    div { class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                        for option in AGE_OPTIONS {
                            button {
                                key: "{option}",
                                class: "{theme::chip(request.age == Some(option))} text-left",
                                onclick: move |_| {
                                    state.with_mut(|s| s.sell.select_age(option));
                                },
                                "{option}"
                            }
                        }
                    }
                }
            }

            div { class: "flex gap-4 pt-6",
                button {
                    class: "{theme::btn_secondary()}",
                    onclick: move |_| {
                        state.with_mut(|s| s.sell.back());
                    },
                    "Back"
                }
                div { class: "flex-[2]",
                    button {
                        class: "{theme::btn_primary()}",
                        disabled: !can_advance,
                        onclick: move |_| {
                            state.with_mut(|s| s.sell.advance());
                        },
                        "Proceed to Diagnostic"
                    }
                }
            }
        }
    }
}

#[component]
fn DiagnosticsStep(request: SellRequest, calculating: bool) -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let on_finish = move |_| {
        let started = state.with_mut(|s| s.sell.begin_assessment());
        let Ok(pending) = started else {
            return;
        };
        spawn(async move {
            tokio::time::sleep(QUOTE_CALCULATION_DELAY).await;
            state.with_mut(|s| s.sell.complete_assessment(pending));
        });
    };

    rsx! {
        div { class: "space-y-10 slide-in pb-20",
            div { class: "space-y-2",
                h2 { class: "text-4xl font-black text-gray-900 tracking-tight",
                    "Health "
                    span { class: "text-indigo-600", "Verification" }
                }
                p { class: "text-gray-500 font-bold uppercase text-[10px] tracking-widest", "Self-Assessment Tool" }
            }

            div { class: "space-y-8",
                div {
                    p { class: "{theme::section_title()}", "Screen Condition" }
                    div { class: "grid grid-cols-1 gap-3",
                        for condition in ScreenCondition::ALL {
                            ConditionCard {
                                key: "{condition.label()}",
                                icon: condition.icon(),
                                label: condition.label(),
                                description: condition.description(),
                                selected: request.screen_condition == condition,
                                disabled: calculating,
                                on_pick: move |_| {
                                    state.with_mut(|s| s.sell.set_screen_condition(condition));
                                },
                            }
                        }
                    }
                }
                div {
                    p { class: "{theme::section_title()}", "Body Condition" }
                    div { class: "grid grid-cols-1 gap-3",
                        for condition in BodyCondition::ALL {
                            ConditionCard {
                                key: "{condition.label()}",
                                icon: condition.icon(),
                                label: condition.label(),
                                description: condition.description(),
                                selected: request.body_condition == condition,
                                disabled: calculating,
                                on_pick: move |_| {
                                    state.with_mut(|s| s.sell.set_body_condition(condition));
                                },
                            }
                        }
                    }
                }
            }

            div { class: "space-y-6",
                p { class: "{theme::section_title()}", "Functional Scan" }
                div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                    for check in FunctionalCheck::ALL {
                        {
                            let passing = request.functional_checks.get(check);
                            rsx! {
                                button {
                                    key: "{check.label()}",
                                    class: "{theme::check_card(passing)}",
                                    disabled: calculating,
                                    onclick: move |_| {
                                        state.with_mut(|s| s.sell.toggle_check(check));
                                    },
                                    div { class: "flex items-center space-x-4",
                                        span { class: "text-xl", "{check.icon()}" }
                                        span { class: "text-sm font-black text-gray-800", "{check.label()}" }
                                    }
                                    div { class: "{theme::check_badge(passing)}", if passing { "OK" } else { "Fail" } }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "bg-white border-2 border-gray-100 p-10 rounded-[2.5rem] space-y-10",
                ToggleRow {
                    title: "Power Status",
                    subtitle: "Does it switch on?",
                    on: request.is_powered_on,
                    disabled: calculating,
                    on_toggle: move |value: bool| {
                        state.with_mut(|s| s.sell.set_powered_on(value));
                    },
                }

                div { class: "space-y-6",
                    div { class: "flex justify-between items-center",
                        p { class: "font-black text-gray-900 text-xl", "Battery Health" }
                        span { class: "px-4 py-2 bg-indigo-100 text-indigo-700 rounded-2xl text-sm font-black tracking-tighter",
                            "{request.battery_health}%"
                        }
                    }
                    input {
                        class: "battery-slider w-full h-3 bg-gray-100 rounded-lg cursor-pointer",
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: "{request.battery_health}",
                        disabled: calculating,
                        oninput: move |evt| {
                            if let Ok(percent) = evt.value().parse::<i64>() {
                                state.with_mut(|s| s.sell.set_battery_health(percent));
                            }
                        },
                    }
                    div { class: "flex justify-between text-[9px] text-gray-400 font-black uppercase tracking-[0.3em]",
                        span { "Needs Repair" }
                        span { "Optimized" }
                    }
                }

                ToggleRow {
                    title: "Network Issues",
                    subtitle: "Calls drop or no signal?",
                    on: request.network_issues,
                    disabled: calculating,
                    on_toggle: move |value: bool| {
                        state.with_mut(|s| s.sell.set_network_issues(value));
                    },
                }
                ToggleRow {
                    title: "Water Damage",
                    subtitle: "Ever been submerged?",
                    on: request.water_damage,
                    disabled: calculating,
                    on_toggle: move |value: bool| {
                        state.with_mut(|s| s.sell.set_water_damage(value));
                    },
                }
            }

            div { class: "flex gap-6 pt-10",
                button {
                    class: "{theme::btn_secondary()} uppercase tracking-widest text-xs",
                    disabled: calculating,
                    onclick: move |_| {
                        state.with_mut(|s| s.sell.back());
                    },
                    "Back"
                }
                div { class: "flex-[2]",
                    button {
                        class: "{theme::btn_primary()} flex items-center justify-center uppercase tracking-widest",
                        disabled: calculating,
                        onclick: on_finish,
                        if calculating {
                            span { class: "flex items-center gap-4",
                                span { class: "spinner" }
                                "Calculating..."
                            }
                        } else {
                            "Get Final Quote"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConditionCard(
    icon: &'static str,
    label: &'static str,
    description: &'static str,
    selected: bool,
    disabled: bool,
    on_pick: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "{theme::option_card(selected)}",
            disabled,
            onclick: move |_| on_pick.call(()),
            span { class: "text-2xl mr-5", "{icon}" }
            div {
                span { class: "{theme::option_title(selected)}", "{label}" }
                span { class: "text-[10px] font-black uppercase text-gray-400 tracking-wider", "{description}" }
            }
        }
    }
}

#[component]
fn ToggleRow(
    title: &'static str,
    subtitle: &'static str,
    on: bool,
    disabled: bool,
    on_toggle: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "flex justify-between items-center",
            div {
                p { class: "font-black text-gray-900 text-xl", "{title}" }
                p { class: "text-xs font-bold text-gray-400 uppercase tracking-widest mt-1", "{subtitle}" }
            }
            button {
                class: if on { "toggle on" } else { "toggle" },
                role: "switch",
                aria_checked: "{on}",
                disabled,
                onclick: move |_| on_toggle.call(!on),
            }
        }
    }
}
