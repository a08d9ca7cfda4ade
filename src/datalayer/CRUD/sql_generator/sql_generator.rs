use sea_query::{Alias, Asterisk, Expr, Iden, Order, PostgresQueryBuilder, Query, SimpleExpr, Value};

/* ----------------------------- FLUENT BUILDER WRAPPER ----------------------------- */

// Every builder renders `(sql, values)` for PostgreSQL. Values are always bound
// as positional parameters, never spliced into the SQL text.

// --- INSERT ---

pub struct FluentInsert {
    table: Alias,
    values: Vec<(Alias, Value)>,
    returning_all: bool,
}

impl FluentInsert {
    pub fn into<T: Iden>(table: T) -> Self {
        Self {
            table: Alias::new(table.to_string()),
            values: vec![],
            returning_all: false,
        }
    }

    /// Adds a column. NULL values are kept: an absent field is written as NULL.
    pub fn value<C: Iden, V: Into<Value>>(mut self, col: C, v: V) -> Self {
        self.values.push((Alias::new(col.to_string()), v.into()));
        self
    }

    pub fn values<C, I>(self, pairs: I) -> Self
    where
        C: Iden,
        I: IntoIterator<Item = (C, Value)>,
    {
        pairs
            .into_iter()
            .fold(self, |insert, (col, val)| insert.value(col, val))
    }

    pub fn returning_all(mut self) -> Self {
        self.returning_all = true;
        self
    }

    pub fn render(self) -> (String, sea_query::Values) {
        let mut query = Query::insert();
        query.into_table(self.table);

        let (cols, vals): (Vec<Alias>, Vec<Value>) = self.values.into_iter().unzip();

        query.columns(cols);
        // cols and vals come from the same pairs, so the arity always matches
        query.values_panic(vals.into_iter().map(SimpleExpr::Value));

        if self.returning_all {
            query.returning_all();
        }

        query.build(PostgresQueryBuilder)
    }
}

// --- SELECT ---

pub struct FluentSelect {
    table: Alias,
    filters: Vec<(Alias, Value)>,
    order_by: Vec<(Alias, Order)>,
}

impl FluentSelect {
    pub fn from<T: Iden>(table: T) -> Self {
        Self {
            table: Alias::new(table.to_string()),
            filters: vec![],
            order_by: vec![],
        }
    }

    pub fn filter<C: Iden, V: Into<Value>>(mut self, col: C, v: V) -> Self {
        self.filters.push((Alias::new(col.to_string()), v.into()));
        self
    }

    /// Appends an ordering term; terms apply in the order they were added
    pub fn order_by<C: Iden>(mut self, col: C, order: Order) -> Self {
        self.order_by.push((Alias::new(col.to_string()), order));
        self
    }

    pub fn render(self) -> (String, sea_query::Values) {
        let mut query = Query::select();
        query.from(self.table);

        query.column(Asterisk);

        for (col, val) in self.filters {
            query.and_where(Expr::col(col).eq(val));
        }

        for (col, order) in self.order_by {
            query.order_by(col, order);
        }

        query.build(PostgresQueryBuilder)
    }
}

// --- UPDATE ---

pub struct FluentUpdate {
    table: Alias,
    values: Vec<(Alias, Value)>,
    filters: Vec<(Alias, Value)>,
    returning_all: bool,
}

impl FluentUpdate {
    pub fn table<T: Iden>(table: T) -> Self {
        Self {
            table: Alias::new(table.to_string()),
            values: vec![],
            filters: vec![],
            returning_all: false,
        }
    }

    /// Sets a column. NULL is written as NULL: updates replace the full field set.
    pub fn value<C: Iden, V: Into<Value>>(mut self, col: C, v: V) -> Self {
        self.values.push((Alias::new(col.to_string()), v.into()));
        self
    }

    pub fn values<C, I>(self, pairs: I) -> Self
    where
        C: Iden,
        I: IntoIterator<Item = (C, Value)>,
    {
        pairs
            .into_iter()
            .fold(self, |update, (col, val)| update.value(col, val))
    }

    pub fn filter<C: Iden, V: Into<Value>>(mut self, col: C, v: V) -> Self {
        self.filters.push((Alias::new(col.to_string()), v.into()));
        self
    }

    pub fn returning_all(mut self) -> Self {
        self.returning_all = true;
        self
    }

    pub fn render(self) -> (String, sea_query::Values) {
        let mut query = Query::update();
        query.table(self.table);

        query.values(
            self.values
                .into_iter()
                .map(|(col, val)| (col, SimpleExpr::Value(val))),
        );

        for (col, val) in self.filters {
            query.and_where(Expr::col(col).eq(val));
        }

        if self.returning_all {
            query.returning_all();
        }

        query.build(PostgresQueryBuilder)
    }
}

// --- DELETE ---

pub struct FluentDelete {
    table: Alias,
    filters: Vec<(Alias, Value)>,
    returning_all: bool,
}

impl FluentDelete {
    pub fn from<T: Iden>(table: T) -> Self {
        Self {
            table: Alias::new(table.to_string()),
            filters: vec![],
            returning_all: false,
        }
    }

    pub fn filter<C: Iden, V: Into<Value>>(mut self, col: C, v: V) -> Self {
        self.filters.push((Alias::new(col.to_string()), v.into()));
        self
    }

    pub fn returning_all(mut self) -> Self {
        self.returning_all = true;
        self
    }

    pub fn render(self) -> (String, sea_query::Values) {
        let mut query = Query::delete();
        query.from_table(self.table);

        for (col, val) in self.filters {
            query.and_where(Expr::col(col).eq(val));
        }

        if self.returning_all {
            query.returning_all();
        }

        query.build(PostgresQueryBuilder)
    }
}
