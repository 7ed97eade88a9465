use crate::components::Card;
use shared::content::study::{SubjectResult, progress, results};
use shared::models::Page;
use yew::prelude::*;

const ENROLLED_CODES: [&str; 3] = ["COMP101", "ENG202", "MATH201"];

fn result_card(result: &SubjectResult) -> Html {
    html! {
        <div class="border border-base-300 rounded-lg p-4 mb-4">
            <div class="flex justify-between mb-2">
                <div>
                    <div class="font-bold">{ result.code }</div>
                    <div class="text-sm text-base-content/70">{ result.name }</div>
                </div>
                <div class="text-right">
                    <div class="font-bold text-primary">{ format!("Final Grade: {} ({})", result.grade, result.mark) }</div>
                </div>
            </div>
            <div class="text-xs font-semibold uppercase text-base-content/60 mt-3 mb-1">{ "Internal Assessments" }</div>
            <table class="table table-xs">
                <tbody>
                    { for result.assessments.iter().map(|assessment| html! {
                        <tr>
                            <td>{ assessment.name }</td>
                            <td>{ assessment.mark }</td>
                            <td class="text-right">
                                <span class="badge badge-ghost badge-sm">{ assessment.status }</span>
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

/// Course progress & results page component
#[function_component(ProgressPage)]
pub fn progress_page() -> Html {
    let course = progress();
    let percent = course.percent_complete();
    let subject_results = results();

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{ Page::Progress.title() }</h1>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <Card title="Course Progress" last_updated="Results Release">
                    <div class="text-4xl font-bold">
                        { course.credits_completed }
                        <span class="text-base font-normal text-base-content/60">{ format!(" / {} credits", course.credits_total) }</span>
                    </div>
                    <progress class="progress progress-primary w-full my-3" value={format!("{percent:.0}")} max="100"></progress>
                    <div class="text-sm">{ format!("{percent:.0}% complete") }</div>
                    <div class="grid grid-cols-2 gap-2 mt-4 text-sm">
                        <div>
                            <div class="text-base-content/60">{ "Expected Completion" }</div>
                            <div class="font-semibold">{ course.expected_completion }</div>
                        </div>
                        <div>
                            <div class="text-base-content/60">{ "Status" }</div>
                            <div class="font-semibold text-success">{ course.status }</div>
                        </div>
                    </div>
                </Card>

                <Card title="Current Enrolment" last_updated="Census Date">
                    <p class="mb-4">{ "Study plan valid. You are enrolled in 50 credits." }</p>
                    <ul class="space-y-2">
                        { for ENROLLED_CODES.into_iter().map(|code| html! {
                            <li class="flex justify-between">
                                <span class="font-semibold">{ code }</span>
                                <span class="badge badge-success badge-sm">{ "Enrolled" }</span>
                            </li>
                        }) }
                    </ul>
                </Card>
            </div>

            <Card title="Results & Grades" last_updated="Live from Canvas">
                { for subject_results.iter().map(result_card) }
            </Card>

            if course.is_final_year() {
                <Card title="Future Study">
                    <p class="mb-4">{ "You are nearing completion. Consider continuing your studies." }</p>
                    <div class="border border-base-300 rounded-lg p-4 flex justify-between items-center">
                        <div>
                            <div class="font-bold">{ "Master of Robotics" }</div>
                            <div class="text-sm text-base-content/60">{ "2 Years • Full Time" }</div>
                        </div>
                        <button class="btn btn-outline btn-sm">{ "Explore Options" }</button>
                    </div>
                </Card>
            }

            <Card title="Need Help?">
                <p class="mb-4">{ "Illness or hardship affecting your studies? You may be eligible for special consideration." }</p>
                <button class="btn btn-outline">{ "Apply for Special Consideration" }</button>
            </Card>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use yew::ServerRenderer;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_progress_hides_future_study_before_final_year() {
        let rendered = ServerRenderer::<ProgressPage>::new().render().await;
        assert!(rendered.contains("Course Progress"));
        assert!(rendered.contains("Final Grade:"));
        assert!(!rendered.contains("Master of Robotics"));
    }
}
