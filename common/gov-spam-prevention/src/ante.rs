// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::context::Context;
use crate::error::AnteError;
use cosmrs::Any;

pub type AnteResult = Result<Context, AnteError>;

/// A transaction as seen by the ante handlers, i.e. its ordered, still-encoded messages.
pub trait AnteTx {
    fn msgs(&self) -> &[Any];
}

impl AnteTx for cosmrs::tx::Body {
    fn msgs(&self) -> &[Any] {
        &self.messages
    }
}

impl AnteTx for cosmrs::tx::Tx {
    fn msgs(&self) -> &[Any] {
        &self.body.messages
    }
}

impl AnteTx for [Any] {
    fn msgs(&self) -> &[Any] {
        self
    }
}

impl AnteTx for Vec<Any> {
    fn msgs(&self) -> &[Any] {
        self
    }
}

/// A single stage of transaction pre-processing.
pub trait AnteHandler<T: ?Sized> {
    fn handle(&self, ctx: &Context, tx: &T, simulate: bool) -> AnteResult;
}

impl<T, F> AnteHandler<T> for F
where
    T: ?Sized,
    F: Fn(&Context, &T, bool) -> AnteResult,
{
    fn handle(&self, ctx: &Context, tx: &T, simulate: bool) -> AnteResult {
        self(ctx, tx, simulate)
    }
}

/// A stage that decides whether (and how) the rest of the pipeline, `next`, gets invoked.
pub trait AnteDecorator<T: ?Sized> {
    fn ante_handle(
        &self,
        ctx: &Context,
        tx: &T,
        simulate: bool,
        next: &dyn AnteHandler<T>,
    ) -> AnteResult;
}

type BoxedDecorator<T> = Box<dyn AnteDecorator<T> + Send + Sync>;

/// Linear pipeline of decorators, run in insertion order.
pub struct AnteChain<T: ?Sized> {
    decorators: Vec<BoxedDecorator<T>>,
}

impl<T: ?Sized> Default for AnteChain<T> {
    fn default() -> Self {
        AnteChain {
            decorators: Vec::new(),
        }
    }
}

impl<T: ?Sized> AnteChain<T> {
    pub fn new() -> Self {
        AnteChain::default()
    }

    #[must_use]
    pub fn with_decorator<D>(mut self, decorator: D) -> Self
    where
        D: AnteDecorator<T> + Send + Sync + 'static,
    {
        self.decorators.push(Box::new(decorator));
        self
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }
}

impl<T: ?Sized> AnteHandler<T> for AnteChain<T> {
    fn handle(&self, ctx: &Context, tx: &T, simulate: bool) -> AnteResult {
        Remaining {
            decorators: &self.decorators,
        }
        .handle(ctx, tx, simulate)
    }
}

struct Remaining<'a, T: ?Sized> {
    decorators: &'a [BoxedDecorator<T>],
}

impl<T: ?Sized> AnteHandler<T> for Remaining<'_, T> {
    fn handle(&self, ctx: &Context, tx: &T, simulate: bool) -> AnteResult {
        match self.decorators.split_first() {
            // end of the chain
            None => Ok(ctx.clone()),
            Some((decorator, rest)) => {
                decorator.ante_handle(ctx, tx, simulate, &Remaining { decorators: rest })
            }
        }
    }
}
