//! Lagrange basis functions over a fixed set of nodes.
//!
//! [`LagrangeBasis`] is a lazy factory: it stores the nodes once and hands
//! out [`BasisFunction`] values that capture an index and a shared handle to
//! those nodes. Nothing is tabulated, so retrieving a basis function is O(1)
//! and evaluating one is O(n).

use std::ops::Range;
use std::sync::Arc;

use lagrange_math::traits::Domain;

use crate::coordinates::validate_nodes;
use crate::error::{InterpolationError, InterpolationResult};

/// Factory for the Lagrange basis `ℓ_0, …, ℓ_{n-1}` over distinct nodes.
#[derive(Debug, Clone)]
pub struct LagrangeBasis<D: Domain> {
    domain: D,
    xs: Arc<[D::Scalar]>,
}

impl<D: Domain> LagrangeBasis<D> {
    /// Build a basis over `xs`, rejecting repeated or non-finite nodes.
    pub fn new(domain: D, xs: Vec<D::Scalar>) -> InterpolationResult<Self> {
        validate_nodes(&domain, &xs)?;
        Ok(Self::from_shared(domain, xs.into()))
    }

    /// Wrap nodes that were already validated by the caller.
    pub(crate) fn from_shared(domain: D, xs: Arc<[D::Scalar]>) -> Self {
        Self { domain, xs }
    }

    pub fn domain(&self) -> &D {
        &self.domain
    }

    pub fn nodes(&self) -> &[D::Scalar] {
        &self.xs
    }

    /// Number of basis functions, one per node.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The basis function `ℓ_index`.
    pub fn get(&self, index: usize) -> InterpolationResult<BasisFunction<D>> {
        if index >= self.len() {
            return Err(InterpolationError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.function(index))
    }

    /// Basis functions for `start, start + step, …` while `< stop`.
    ///
    /// An empty range (`start >= stop`) yields no functions. Every index
    /// that would be produced must be in bounds.
    pub fn get_range(
        &self,
        start: usize,
        stop: usize,
        step: usize,
    ) -> InterpolationResult<Vec<BasisFunction<D>>> {
        if step == 0 {
            return Err(InterpolationError::InvalidStep);
        }
        (start..stop)
            .step_by(step)
            .map(|index| self.get(index))
            .collect()
    }

    /// Contiguous range of basis functions, `range.start..range.end`.
    pub fn slice(
        &self,
        range: Range<usize>,
    ) -> InterpolationResult<Vec<BasisFunction<D>>> {
        self.get_range(range.start, range.end, 1)
    }

    /// All basis functions in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = BasisFunction<D>> + '_ {
        (0..self.len()).map(|index| self.function(index))
    }

    /// `[ℓ_0(x), …, ℓ_{n-1}(x)]`.
    pub fn evaluate_all(
        &self,
        x: D::Scalar,
    ) -> InterpolationResult<Vec<D::Scalar>> {
        self.iter().map(|basis| basis.evaluate(x)).collect()
    }

    fn function(&self, index: usize) -> BasisFunction<D> {
        BasisFunction {
            index,
            domain: self.domain,
            xs: Arc::clone(&self.xs),
        }
    }
}

impl<'a, D: Domain> IntoIterator for &'a LagrangeBasis<D> {
    type Item = BasisFunction<D>;
    type IntoIter = Box<dyn ExactSizeIterator<Item = BasisFunction<D>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// A single Lagrange basis polynomial `ℓ_j`.
#[derive(Debug, Clone)]
pub struct BasisFunction<D: Domain> {
    index: usize,
    domain: D,
    xs: Arc<[D::Scalar]>,
}

impl<D: Domain> BasisFunction<D> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// The node `x_j` at which this function equals one.
    pub fn node(&self) -> D::Scalar {
        self.xs[self.index]
    }

    /// `ℓ_j(x) = Π (x - x_m) / (x_j - x_m)` over every node `x_m ≠ x_j`.
    ///
    /// Nodes are excluded by value, not by position.
    pub fn evaluate(&self, x: D::Scalar) -> InterpolationResult<D::Scalar> {
        let domain = &self.domain;
        if !domain.is_admissible(&x) {
            return Err(InterpolationError::NonFiniteInput);
        }

        let x_j = self.node();
        let degenerate = InterpolationError::DegenerateBasis {
            index: self.index,
        };
        let product = self
            .xs
            .iter()
            .filter(|&&x_m| x_m != x_j)
            .try_fold(domain.one(), |acc, &x_m| {
                domain
                    .checked_div(domain.sub(x, x_m), domain.sub(x_j, x_m))
                    .map(|term| domain.mul(acc, term))
            })
            .ok_or_else(|| degenerate.clone())?;

        if !domain.is_admissible(&product) {
            return Err(degenerate);
        }
        Ok(product)
    }

    /// Closure view, for call sites that want a plain function.
    pub fn as_fn(
        &self,
    ) -> impl Fn(D::Scalar) -> InterpolationResult<D::Scalar> + '_ {
        move |x| self.evaluate(x)
    }
}
