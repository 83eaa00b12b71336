use crate::static_content::SITE_TITLE;

use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    use crate::components::*;

    html! {
        <WithTheme>
            <DefaultStyling>
                <PageTitle title={ SITE_TITLE }/>
                <Header/>
                <main>
                    <Hero/>
                    <Journey/>
                    <TechStack/>
                    <Projects/>
                    <Contact/>
                </main>
            </DefaultStyling>
        </WithTheme>
    }
}
