use yew::prelude::*;
use yew_router::prelude::*;

use crate::icons::{ArrowRight, Sparkles};
use crate::routes::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="relative h-screen overflow-hidden">
            // Light overlay keeps the copy readable over the birds
            <div class="absolute inset-0 bg-white/20 z-10" />

            <div class="relative z-20 h-full flex items-center justify-center px-4">
                <div class="text-center max-w-4xl mx-auto">
                    <div class="inline-flex items-center gap-2 bg-gray-900/10 backdrop-blur-md border border-gray-900/20 rounded-full px-4 py-2 mb-6 animate-fade-in">
                        <Sparkles class="text-blue-600" size={20} />
                        <span class="text-gray-900 font-medium">{ "Bold & Visionary" }</span>
                    </div>

                    <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold mb-6 leading-tight text-gray-900 animate-slide-up">
                        { "Innovating the Future" }
                        <span class="block mt-2 bg-gradient-to-r from-blue-600 to-indigo-600 bg-clip-text text-transparent">
                            { "Research & Development Hub" }
                        </span>
                    </h1>

                    <p class="text-xl sm:text-2xl text-gray-700 mb-8 animate-fade-in-delay">
                        { "Where creativity meets engineering excellence." }
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center animate-fade-in-delay-2">
                        <Link<Route>
                            to={Route::Projects}
                            classes="group bg-gray-900 text-white px-8 py-4 rounded-lg font-semibold transition-all duration-300 flex items-center justify-center gap-2 shadow-lg hover:shadow-xl hover:scale-105"
                        >
                            { "Explore Projects" }
                            <ArrowRight class="group-hover:translate-x-1 transition-transform" size={20} />
                        </Link<Route>>

                        <Link<Route>
                            to={Route::Profiles}
                            classes="bg-transparent border border-gray-900/50 text-gray-900 hover:bg-gray-900 hover:text-white px-8 py-4 rounded-lg font-semibold transition-all duration-300"
                        >
                            { "Meet the Team" }
                        </Link<Route>>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 z-20 animate-bounce">
                <div class="w-6 h-10 border-2 border-gray-900/70 rounded-full flex items-start justify-center p-2">
                    <div class="w-1.5 h-1.5 bg-gray-900/70 rounded-full" />
                </div>
            </div>
        </section>
    }
}
