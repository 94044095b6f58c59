use colored::Colorize;
use serde::Deserialize;
use tracing::{info, warn};

use crate::client::{ClientError, GraphQLClient, Transport};

pub mod card;

use card::TodoCard;

pub const GET_TODOS: &str = r#"
  query {
    getTodos {
      id
      todo
      completed
      fullName
    }
  }
"#;

const GRID_GAP: &str = "  ";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub todo: String,
    pub completed: bool,
    pub full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetTodos {
    get_todos: Vec<TodoItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Failed(String),
    Loaded(Vec<TodoItem>),
}

impl ViewState {
    /// Settles a loading view with the outcome of its query. A view that has
    /// already settled keeps its state.
    pub fn settle(self, outcome: Result<Vec<TodoItem>, ClientError>) -> ViewState {
        match self {
            ViewState::Loading => match outcome {
                Ok(todos) => ViewState::Loaded(todos),
                Err(err) => ViewState::Failed(err.to_string()),
            },
            settled => settled,
        }
    }
}

/// The todo list view: queries once on mount, then renders from its state.
pub struct TodoPage {
    state: ViewState,
    width: usize,
}

impl TodoPage {
    pub fn new(width: usize) -> TodoPage {
        TodoPage {
            state: ViewState::Loading,
            width,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub async fn mount<T: Transport>(&mut self, client: &GraphQLClient<T>) {
        if self.state != ViewState::Loading {
            return;
        }

        let outcome = client
            .query::<GetTodos>(GET_TODOS)
            .await
            .map(|data| data.get_todos);
        match &outcome {
            Ok(todos) => info!(count = todos.len(), "Todos loaded"),
            Err(err) => warn!("Loading todos failed: {}", err),
        }
        let state = std::mem::replace(&mut self.state, ViewState::Loading);
        self.state = state.settle(outcome);
    }

    pub fn render(&self) -> String {
        render(&self.state, self.width)
    }
}

pub fn render(state: &ViewState, width: usize) -> String {
    match state {
        ViewState::Loading => format!("{:^width$}\n", "Loading ...", width = width),
        ViewState::Failed(message) => format!("{}\n", format!("Error: {}", message).red()),
        ViewState::Loaded(todos) => {
            let mut output = format!("{}\n\n", "Todo List".bold());
            output.push_str(&render_grid(todos, width));
            output
        }
    }
}

/// 1, 2 or 3 columns depending on the available width.
pub fn columns_for_width(width: usize) -> usize {
    match width {
        0..=79 => 1,
        80..=119 => 2,
        _ => 3,
    }
}

fn render_grid(todos: &[TodoItem], width: usize) -> String {
    let columns = columns_for_width(width);
    let gaps = GRID_GAP.len() * (columns - 1);
    let inner_width = (width.saturating_sub(gaps) / columns).saturating_sub(4);
    let blank = " ".repeat(TodoCard::outer_width(inner_width));

    let mut output = String::new();
    for row in todos.chunks(columns) {
        let cards: Vec<Vec<String>> = row
            .iter()
            .map(|todo| TodoCard::new(todo).lines(inner_width))
            .collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);

        for i in 0..height {
            let line = cards
                .iter()
                .map(|card| card.get(i).map(String::as_str).unwrap_or(&blank))
                .collect::<Vec<_>>()
                .join(GRID_GAP);
            output.push_str(line.trim_end());
            output.push('\n');
        }
    }
    output
}
