//! Election result table for one round.

use politicdle_game::CandidateResult;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultsTableProps {
    pub title: AttrValue,
    pub results: Vec<CandidateResult>,
}

#[function_component(ResultsTable)]
pub fn results_table(props: &ResultsTableProps) -> Html {
    html! {
        <section class="results">
            <h2>{ props.title.clone() }</h2>
            <table>
                <thead>
                    <tr>
                        <th>{ "Candidat" }</th>
                        <th>{ "Résultat" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.results.iter().map(|line| html! {
                        <tr key={line.name.clone()}>
                            <td>{ line.name.clone() }</td>
                            <td>{ format!("{}%", line.percent) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </section>
    }
}
