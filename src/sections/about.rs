use yew::prelude::*;

use crate::icons::{Award, Sparkles, Users};

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    Sparkles,
    Users,
    Award,
}

#[derive(Clone, Copy, PartialEq)]
struct Stat {
    value: &'static str,
    label: &'static str,
    icon: StatIcon,
}

const STATS: &[Stat] = &[
    Stat { value: "50+", label: "Active Projects", icon: StatIcon::Sparkles },
    Stat { value: "100+", label: "Student Researchers", icon: StatIcon::Users },
    Stat { value: "20+", label: "Awards Won", icon: StatIcon::Award },
];

const CREDO: &[&str] = &[
    "We welcome ideas like Atithi.",
    "We power them with AI.",
    "We shape the future through innovation.",
];

const CARD: &str = "bg-gray-900/10 backdrop-blur-md border border-gray-300";

fn stat_icon(icon: StatIcon) -> Html {
    match icon {
        StatIcon::Sparkles => html! { <Sparkles class="text-white" size={32} /> },
        StatIcon::Users => html! { <Users class="w-8 h-8 text-white" /> },
        StatIcon::Award => html! { <Award class="w-8 h-8 text-white" /> },
    }
}

fn stat_card(stat: &Stat) -> Html {
    html! {
        <div class={classes!(CARD, "p-8", "rounded-2xl", "text-center", "shadow-xl", "hover:shadow-2xl", "transition-all", "duration-300", "hover:scale-105", "animate-fade-up")}>
            <div class="w-16 h-16 bg-blue-600 rounded-full flex items-center justify-center mx-auto mb-4">
                { stat_icon(stat.icon) }
            </div>
            <h3 class="text-3xl font-bold mb-2 text-gray-900">{ stat.value }</h3>
            <p class="text-gray-800 font-medium">{ stat.label }</p>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="relative py-20 z-10">
            <div class="max-w-7xl mx-auto px-4">
                <div class={classes!(CARD, "rounded-3xl", "p-8", "md:p-12", "shadow-2xl", "max-w-6xl", "mx-auto", "mb-16")}>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-12 items-center justify-items-center">
                        <div class="animate-fade-up flex justify-center">
                            <img
                                src="/images/harsh.jpg"
                                alt="Inspiration"
                                class="w-64 md:w-80 lg:w-96 h-auto rounded-2xl shadow-2xl object-cover"
                            />
                        </div>

                        <div class="animate-fade-up text-center md:text-left">
                            <h2 class="text-4xl md:text-5xl font-bold mb-0 text-gray-900">{ "INSPIRATION" }</h2>
                            <p class="text-base md:text-lg text-gray-700 font-medium mb-6">{ "(Harsh Shanghavi)" }</p>
                            <div class="space-y-5">
                                <p class="text-xl text-gray-900 leading-relaxed font-semibold">
                                    { "AI = Atithi + Innovation" }
                                </p>
                                { for CREDO.iter().map(|line| html! {
                                    <p class="text-lg text-gray-800 leading-relaxed font-medium">{ *line }</p>
                                })}
                            </div>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    { for STATS.iter().map(stat_card) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_stat_cards_in_display_order() {
        let labels: Vec<_> = STATS.iter().map(|s| (s.value, s.label)).collect();
        assert_eq!(
            labels,
            vec![
                ("50+", "Active Projects"),
                ("100+", "Student Researchers"),
                ("20+", "Awards Won"),
            ]
        );
    }
}
