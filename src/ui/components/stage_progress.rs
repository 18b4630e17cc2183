use dioxus::prelude::*;

use crate::domain::SellStage;

/// The input stages shown in the progress bar.
const STEPS: [SellStage; 3] = [SellStage::DeviceSelect, SellStage::Specs, SellStage::Diagnostics];

#[component]
pub fn StageProgress(stage: SellStage) -> Element {
    let current = stage.step_number();

    rsx! {
        div { class: "mb-12",
            div { class: "flex items-center justify-between max-w-md mx-auto",
                for (index, step) in STEPS.iter().enumerate() {
                    {
                        let number = step.step_number();
                        let reached = number <= current;
                        let circle = if reached {
                            "w-12 h-12 rounded-2xl flex items-center justify-center font-black text-sm bg-indigo-600 text-white shadow-xl shadow-indigo-100"
                        } else {
                            "w-12 h-12 rounded-2xl flex items-center justify-center font-black text-sm bg-gray-100 text-gray-400"
                        };
                        let caption = if reached { "text-indigo-600" } else { "text-gray-400" };
                        rsx! {
                            div { class: "flex flex-col items-center",
                                div { class: "{circle}", "{number}" }
                                span { class: "mt-3 text-[10px] font-black uppercase tracking-widest {caption}", "{step.label()}" }
                            }
                            if index + 1 < STEPS.len() {
                                div {
                                    class: if number < current { "flex-1 h-1 mx-4 rounded-full bg-indigo-600" } else { "flex-1 h-1 mx-4 rounded-full bg-gray-100" },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
