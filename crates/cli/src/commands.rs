use anyhow::Context;
use docket_core::DocketId;
use docket_gateway::{GatewayError, RegulationGateway};
use docket_search::{SearchView, ViewStatus};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::render;

const QUIT: &str = ":q";

/// `list`: initial load through a search view
pub async fn list<G, W>(gateway: Arc<G>, out: &mut W) -> anyhow::Result<ViewStatus>
where
    G: RegulationGateway + ?Sized,
    W: Write,
{
    let view = SearchView::new(gateway);
    let status = view.mount().await;
    render::write_status(out, &status)?;
    Ok(status)
}

/// `search <term>`: one search through a search view
pub async fn search<G, W>(gateway: Arc<G>, term: &str, out: &mut W) -> anyhow::Result<ViewStatus>
where
    G: RegulationGateway + ?Sized,
    W: Write,
{
    let view = SearchView::new(gateway);
    let status = view.submit(term).await;
    render::write_status(out, &status)?;
    Ok(status)
}

/// `show <id>`: direct single-record lookup
pub async fn show<G, W>(gateway: &G, id: DocketId, out: &mut W) -> anyhow::Result<()>
where
    G: RegulationGateway + ?Sized,
    W: Write,
{
    match gateway.fetch_one(id).await {
        Ok(regulation) => {
            render::write_regulation(out, &regulation)?;
            Ok(())
        }
        Err(GatewayError::NotFound(id)) => anyhow::bail!("No regulation with docket id {id}"),
        Err(e) => Err(e).with_context(|| format!("Failed to fetch regulation {id}")),
    }
}

/// `interactive`: mount once, then submit each input line as a query
pub async fn interactive<G, R, W>(gateway: Arc<G>, input: R, out: &mut W) -> anyhow::Result<()>
where
    G: RegulationGateway + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let view = SearchView::new(gateway);
    let status = view.mount().await;
    render::write_status(out, &status)?;

    let mut lines = input.lines();
    loop {
        write!(out, "search> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await.context("Failed to read query")? else {
            writeln!(out)?;
            break;
        };
        if line.trim() == QUIT {
            break;
        }

        let status = view.submit(line).await;
        render::write_status(out, &status)?;
    }
    Ok(())
}
