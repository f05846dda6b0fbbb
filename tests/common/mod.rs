/// Joins scripted answers into stdin content, one per line.
pub fn script(answers: &[&str]) -> String {
    let mut input = answers.join("\n");
    input.push('\n');
    input
}
