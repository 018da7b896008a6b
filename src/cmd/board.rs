use clap::Subcommand;
use dialoguer::Confirm;

use crate::{
    conf::settings,
    pkg::{
        board::{
            client::HttpJobsApi,
            form::CardForm,
            state::{Board, DropTarget, MoveOutcome},
        },
        internal::adaptors::jobs::spec::JobStatus,
    },
    prelude::{Error, Result},
};

#[derive(Subcommand)]
pub enum BoardAction {
    Show,
    Add {
        company: String,
        role: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    Edit {
        id: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    Move {
        id: String,
        status: String,
    },
    Rm {
        id: String,
    },
}

pub async fn run(action: BoardAction) -> Result<()> {
    let api = HttpJobsApi::new(&settings.base_url);
    let mut board = Board::load(api).await?;
    match action {
        BoardAction::Show => show(&board),
        BoardAction::Add {
            company,
            role,
            date,
            status,
        } => {
            let mut form = CardForm::empty(chrono::Local::now().date_naive());
            form.company = company;
            form.role = role;
            if let Some(date) = date {
                form.date_applied = date;
            }
            if let Some(status) = status {
                form.status = parse_status(&status)?;
            }
            let job = board.save(form).await?;
            println!("created {}", job.id);
        }
        BoardAction::Edit {
            id,
            company,
            role,
            date,
            status,
        } => {
            let card = board.card(&id).ok_or(Error::NotFound("Job"))?;
            let mut form = CardForm::for_card(card);
            if let Some(company) = company {
                form.company = company;
            }
            if let Some(role) = role {
                form.role = role;
            }
            if let Some(date) = date {
                form.date_applied = date;
            }
            if let Some(status) = status {
                form.status = parse_status(&status)?;
            }
            let job = board.save(form).await?;
            println!("updated {}", job.id);
        }
        BoardAction::Move { id, status } => {
            let status = parse_status(&status)?;
            match board.move_card(&id, DropTarget::Column(status)).await? {
                MoveOutcome::Moved(status) => println!("moved {} to {}", id, status),
                MoveOutcome::Unchanged => println!("nothing to do"),
            }
        }
        BoardAction::Rm { id } => {
            let confirmed = Confirm::new()
                .with_prompt("Are you sure you want to delete this job application?")
                .interact()?;
            if !confirmed {
                return Ok(());
            }
            board.remove(&id).await?;
            println!("deleted {}", id);
        }
    }
    Ok(())
}

fn parse_status(raw: &str) -> Result<JobStatus> {
    raw.parse()
        .map_err(|_| Error::field("status", &format!("`{}` is not a valid status", raw)))
}

fn show(board: &Board<HttpJobsApi>) {
    for (status, cards) in board.columns() {
        println!("{} ({})", status, cards.len());
        for card in cards {
            println!(
                "  {}  {} / {} [{}]",
                card.id, card.company, card.role, card.date_applied
            );
        }
    }
}
