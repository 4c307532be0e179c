//! Main application component

use leptos::*;
use leptos_router::*;
use crate::pages::*;
use crate::components::*;

#[component]
pub fn App() -> impl IntoView {
    // Above the router so toasts outlive page changes
    provide_toaster();

    view! {
        <Router>
            <div class="min-h-screen flex flex-col bg-gray-50">
                <Nav/>
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/upload" view=UploadPage/>
                        <Route path="/results" view=ResultsPage/>
                        <Route path="/about" view=AboutPage/>
                    </Routes>
                </main>
                <Footer/>
                <ToastRegion/>
            </div>
        </Router>
    }
}
