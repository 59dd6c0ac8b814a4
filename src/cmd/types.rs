use crate::domain::commit_type::CommitType;

pub fn run() {
    print!("{}", type_listing());
}

fn type_listing() -> String {
    let width = CommitType::ALL
        .iter()
        .map(|kind| kind.as_str().len())
        .max()
        .unwrap_or(0);
    CommitType::ALL
        .iter()
        .map(|kind| format!("{:<width$}  {}\n", kind.as_str(), kind.description()))
        .collect()
}
